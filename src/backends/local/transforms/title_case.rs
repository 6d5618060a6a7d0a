use crate::config::ToolName;
use crate::traits::Transform;

/// Lowercases the text and capitalizes the first character after every
/// literal space.
///
/// Splitting is on a single `' '`, not on whitespace runs: consecutive
/// spaces yield empty tokens and come back unchanged, and words after a tab
/// or newline are not capitalized.
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Title Case transform
pub struct TitleCaseTransform;

impl TitleCaseTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for TitleCaseTransform {
    fn apply(&self, input: &str) -> String {
        title_case(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::TitleCase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title_case() {
        assert_eq!(title_case("the quick brown fox"), "The Quick Brown Fox");
        assert_eq!(title_case("tHE qUICK"), "The Quick");
    }

    #[test]
    fn test_extra_spaces_preserved() {
        assert_eq!(title_case("  hello   world "), "  Hello   World ");
    }

    #[test]
    fn test_only_spaces_split_words() {
        assert_eq!(title_case("one\ntwo\tthree four"), "One\ntwo\tthree Four");
    }

    #[test]
    fn test_idempotent() {
        let once = title_case("ÉCOLE normale supérieure");
        assert_eq!(once, "École Normale Supérieure");
        assert_eq!(title_case(&once), once);
    }
}
