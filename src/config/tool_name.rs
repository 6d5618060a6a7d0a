// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DispatchError;

/// Identifier of a catalog transform.
///
/// The wire names (`smart-unwrap`, `sent-case`, ...) are what users type on
/// the command line and list in YAML configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ToolName {
    #[serde(rename = "smart-unwrap")]
    SmartUnwrap,
    #[serde(rename = "trim-space")]
    TrimSpace,
    #[serde(rename = "fix-quotes")]
    FixQuotes,
    #[serde(rename = "sent-case")]
    SentenceCase,
    #[serde(rename = "title-case")]
    TitleCase,
    #[serde(rename = "upper-case")]
    UpperCase,
    #[serde(rename = "sort-lines")]
    SortLines,
    #[serde(rename = "strip-html")]
    StripHtml,
    #[serde(rename = "extract-emails")]
    ExtractEmails,
}

/// Toolbar grouping of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    /// Whitespace, wrapping and punctuation cleanup.
    Format,
    /// Case changes and line ordering.
    Transform,
    /// Markup removal and extraction.
    Clean,
}

impl ToolName {
    /// Every tool, in toolbar order.
    pub const ALL: [ToolName; 9] = [
        ToolName::SmartUnwrap,
        ToolName::TrimSpace,
        ToolName::FixQuotes,
        ToolName::SentenceCase,
        ToolName::TitleCase,
        ToolName::UpperCase,
        ToolName::SortLines,
        ToolName::StripHtml,
        ToolName::ExtractEmails,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SmartUnwrap => "smart-unwrap",
            ToolName::TrimSpace => "trim-space",
            ToolName::FixQuotes => "fix-quotes",
            ToolName::SentenceCase => "sent-case",
            ToolName::TitleCase => "title-case",
            ToolName::UpperCase => "upper-case",
            ToolName::SortLines => "sort-lines",
            ToolName::StripHtml => "strip-html",
            ToolName::ExtractEmails => "extract-emails",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            ToolName::SmartUnwrap | ToolName::TrimSpace | ToolName::FixQuotes => {
                ToolCategory::Format
            }
            ToolName::SentenceCase
            | ToolName::TitleCase
            | ToolName::UpperCase
            | ToolName::SortLines => ToolCategory::Transform,
            ToolName::StripHtml | ToolName::ExtractEmails => ToolCategory::Clean,
        }
    }
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 3] = [
        ToolCategory::Format,
        ToolCategory::Transform,
        ToolCategory::Clean,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Format => "Smart Formatting",
            ToolCategory::Transform => "Transformations",
            ToolCategory::Clean => "Deep Clean",
        }
    }

    /// Tools of this category, in toolbar order.
    pub fn tools(&self) -> impl Iterator<Item = ToolName> + '_ {
        ToolName::ALL
            .into_iter()
            .filter(move |tool| tool.category() == *self)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownTool {
                requested: s.to_string(),
            })
    }
}
