use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::NO_EMAILS_FOUND;
use crate::config::ToolName;
use crate::traits::Transform;

/// Heuristic address pattern, not RFC 5322. Adjacent punctuation from the
/// same character class (a trailing `.` or `-`) is swallowed into the match.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9._-]+").unwrap());

/// Returns the distinct addresses in first-occurrence order, one per line,
/// or `"No emails found."` when there are none.
///
/// Distinctness is case-sensitive: `a@b.com` and `A@B.COM` are both kept.
pub fn extract_emails(text: &str) -> String {
    let mut seen = HashSet::new();
    let found: Vec<&str> = EMAIL
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|address| seen.insert(*address))
        .collect();

    if found.is_empty() {
        NO_EMAILS_FOUND.to_string()
    } else {
        found.join("\n")
    }
}

/// Extract Emails transform
pub struct ExtractEmailsTransform;

impl ExtractEmailsTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for ExtractEmailsTransform {
    fn apply(&self, input: &str) -> String {
        extract_emails(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::ExtractEmails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_is_case_sensitive() {
        assert_eq!(
            extract_emails("contact a@b.com or A@B.COM"),
            "a@b.com\nA@B.COM"
        );
    }

    #[test]
    fn test_duplicates_keep_first_occurrence_order() {
        let text = "x@y.org, first.last@mail.example.com; x@y.org again";
        assert_eq!(
            extract_emails(text),
            "x@y.org\nfirst.last@mail.example.com"
        );
    }

    #[test]
    fn test_no_match_sentinel() {
        assert_eq!(extract_emails("no addresses here"), "No emails found.");
        assert_eq!(extract_emails(""), "No emails found.");
        assert_eq!(extract_emails("user@localhost"), "No emails found.");
    }

    #[test]
    fn test_trailing_period_is_part_of_match() {
        assert_eq!(extract_emails("Mail me at me@site.com."), "me@site.com.");
    }

    #[test]
    fn test_plus_addressing_is_outside_the_class() {
        assert_eq!(extract_emails("<tag+x@host.io>"), "x@host.io");
    }
}
