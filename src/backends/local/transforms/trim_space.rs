use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ToolName;
use crate::traits::Transform;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Normalizes whitespace: tabs become spaces, space runs collapse, every
/// line is trimmed and blank lines are dropped.
pub fn trim_space(text: &str) -> String {
    let detabbed = text.replace('\t', " ");
    let collapsed = SPACE_RUN.replace_all(&detabbed, " ");

    collapsed
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trim Space transform - whitespace normalization
pub struct TrimSpaceTransform;

impl TrimSpaceTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for TrimSpaceTransform {
    fn apply(&self, input: &str) -> String {
        trim_space(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::TrimSpace
    }
}
