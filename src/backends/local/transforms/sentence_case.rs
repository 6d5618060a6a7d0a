use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::ToolName;
use crate::traits::Transform;

/// Start of text, or terminal punctuation, then optional whitespace and the
/// first ASCII word character.
static SENTENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[A-Za-z0-9_]|[.!?]\s*[A-Za-z0-9_]").unwrap());

/// Lowercases the text, then capitalizes the first word character of each
/// sentence. Abbreviations and numerals are not special-cased.
pub fn sentence_case(text: &str) -> String {
    let lower = text.to_lowercase();
    SENTENCE_START
        .replace_all(&lower, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Sentence Case transform
pub struct SentenceCaseTransform;

impl SentenceCaseTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for SentenceCaseTransform {
    fn apply(&self, input: &str) -> String {
        sentence_case(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::SentenceCase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_each_sentence() {
        assert_eq!(
            sentence_case("hello WORLD. this is? YES!  ok"),
            "Hello world. This is? Yes!  Ok"
        );
    }

    #[test]
    fn test_leading_whitespace_and_ellipsis() {
        assert_eq!(sentence_case("  the end...and"), "  The end...And");
    }

    #[test]
    fn test_break_across_newline() {
        assert_eq!(sentence_case("one.\n\ntwo"), "One.\n\nTwo");
    }

    #[test]
    fn test_abbreviations_are_not_special() {
        assert_eq!(sentence_case("see e.g. THIS"), "See e.G. This");
    }

    #[test]
    fn test_non_ascii_sentence_start_stays_lowercase() {
        assert_eq!(sentence_case("ÉTÉ. ÉCOLE"), "été. école");
    }

    #[test]
    fn test_applied_twice_is_stable() {
        let once = sentence_case("MIXED case. another ONE");
        assert_eq!(sentence_case(&once), once);
    }
}
