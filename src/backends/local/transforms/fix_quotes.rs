use crate::config::ToolName;
use crate::traits::Transform;

/// Replaces typographic quotes and dashes with their ASCII counterparts.
pub fn fix_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect()
}

/// Fix Quotes transform - straightens curly quotes and dashes
pub struct FixQuotesTransform;

impl FixQuotesTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for FixQuotesTransform {
    fn apply(&self, input: &str) -> String {
        fix_quotes(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::FixQuotes
    }
}
