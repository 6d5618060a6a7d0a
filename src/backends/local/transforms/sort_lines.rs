use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::ToolName;
use crate::traits::Transform;

/// Sorts the non-blank lines of the text.
///
/// Blank lines (empty after trimming) are dropped; kept lines are emitted
/// untrimmed. The sort is stable, so lines that compare equal keep their
/// input order.
pub fn sort_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    lines.sort_by_cached_key(|line| CollationKey::new(line));
    lines.join("\n")
}

/// Locale-aware comparison approximating the root collation order.
///
/// Whitespace sorts before punctuation and symbols, which sort before
/// digits, which sort before letters. Letters compare case- and
/// accent-insensitively first; accents break ties next, then case with
/// lowercase first, then raw code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Primary weight groups, in root collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Symbol
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: Vec<(CharClass, char)>,
    accents: String,
    case: Vec<bool>,
    raw: String,
}

impl CollationKey {
    fn new(line: &str) -> Self {
        let decomposed: Vec<char> = line.nfd().collect();

        let base = decomposed
            .iter()
            .filter(|c| !is_combining_mark(**c))
            .flat_map(|c| c.to_lowercase())
            .map(|c| (CharClass::of(c), c))
            .collect();
        let accents = decomposed.iter().flat_map(|c| c.to_lowercase()).collect();
        let case = decomposed
            .iter()
            .filter(|c| !is_combining_mark(**c))
            .map(|c| c.is_uppercase())
            .collect();

        Self {
            base,
            accents,
            case,
            raw: line.to_string(),
        }
    }
}

/// Sort Lines transform
pub struct SortLinesTransform;

impl SortLinesTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for SortLinesTransform {
    fn apply(&self, input: &str) -> String {
        sort_lines(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::SortLines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_and_drops_blank_lines() {
        assert_eq!(sort_lines("banana\napple\n\ncherry"), "apple\nbanana\ncherry");
        assert_eq!(sort_lines("b\n   \n\ta\n"), "\ta\nb");
    }

    #[test]
    fn test_case_insensitive_with_lowercase_first() {
        assert_eq!(sort_lines("Banana\napple\nA\na"), "a\nA\napple\nBanana");
    }

    #[test]
    fn test_accents_sort_next_to_base_letter() {
        assert_eq!(sort_lines("f\né\ne\nz"), "e\né\nf\nz");
    }

    #[test]
    fn test_output_is_permutation_of_non_blank_lines() {
        let input = "delta\n\ncharlie\nalpha\n  \ncharlie\nBravo";
        let mut expected: Vec<&str> = input.split('\n').filter(|l| !l.trim().is_empty()).collect();
        let output = sort_lines(input);
        let mut actual: Vec<&str> = output.split('\n').collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_locale_compare_orders_digits_before_letters() {
        assert_eq!(locale_compare("10 items", "apple"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_punctuation_led_lines_sort_first() {
        assert_eq!(
            sort_lines("apple\n\u{201C}quoted\u{201D}\nbanana"),
            "\u{201C}quoted\u{201D}\napple\nbanana"
        );
        assert_eq!(sort_lines("apple\n~tilde\n{brace"), "{brace\n~tilde\napple");
        assert_eq!(sort_lines("zeta\n\u{2014} note"), "\u{2014} note\nzeta");
    }

    #[test]
    fn test_locale_compare_groups_symbols_before_digits_and_spaces_first() {
        assert_eq!(locale_compare("#tag", "1st"), Ordering::Less);
        assert_eq!(locale_compare("a b", "a-b"), Ordering::Less);
        assert_eq!(locale_compare("a-b", "ab"), Ordering::Less);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sort_lines(""), "");
        assert_eq!(sort_lines("\n\n"), "");
    }
}
