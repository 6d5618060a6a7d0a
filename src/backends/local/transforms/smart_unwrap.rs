use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ToolName;
use crate::traits::Transform;

/// Two or more line breaks: a paragraph separator that is never merged.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
/// A single line break whose preceding character is not terminal punctuation.
static SOFT_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^.!?])\n").unwrap());

/// Merges soft-wrapped lines into paragraphs.
///
/// Paragraph separators survive as exactly `\n\n`. A single line break
/// after `.`, `!` or `?` is kept because the sentence is presumed complete;
/// every other single break becomes a space. The result is trimmed.
pub fn smart_unwrap(text: &str) -> String {
    PARAGRAPH_BREAK
        .split(text)
        .map(|paragraph| SOFT_BREAK.replace_all(paragraph, "${1} ").into_owned())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

/// Smart Unwrap transform - joins hard-wrapped lines
pub struct SmartUnwrapTransform;

impl SmartUnwrapTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for SmartUnwrapTransform {
    fn apply(&self, input: &str) -> String {
        smart_unwrap(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::SmartUnwrap
    }
}
