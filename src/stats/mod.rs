// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Live text statistics.
//!
//! `compute_stats` is the core contract; `ReadingTime` and `format_count`
//! are the display rules presentation layers share.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

use crate::config::consts::WORDS_PER_MINUTE;

/// Derived statistics for a piece of text. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub word_count: usize,
    /// Length in UTF-16 code units, the unit browser text fields report.
    pub char_count: usize,
    pub line_count: usize,
    pub estimated_read_minutes: usize,
}

impl Stats {
    pub fn reading_time(&self) -> ReadingTime {
        ReadingTime(self.estimated_read_minutes)
    }
}

/// Compute statistics for `text`.
///
/// Word and line counts are zero for whitespace-only text. Otherwise words
/// are counted on the trimmed text but lines on the untrimmed text, so
/// trailing newlines still add lines.
pub fn compute_stats(text: &str) -> Stats {
    let char_count = text.encode_utf16().count();
    let trimmed = text.trim_matches(is_text_whitespace);

    if trimmed.is_empty() {
        return Stats {
            char_count,
            ..Stats::default()
        };
    }

    let word_count = trimmed
        .split(is_text_whitespace)
        .filter(|word| !word.is_empty())
        .count();
    let line_count = text.split('\n').count();

    Stats {
        word_count,
        char_count,
        line_count,
        estimated_read_minutes: word_count.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Unicode whitespace plus the byte-order mark, which browser text fields
/// also treat as blank.
fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Reading-time estimate as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime(pub usize);

impl Display for ReadingTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 < 1 {
            f.write_str("under a minute")
        } else {
            write!(f, "~{}m", self.0)
        }
    }
}

/// Format a count with comma thousands separators (`12345` -> `12,345`).
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Words: {} | Characters: {} | Lines: {} | Reading time: {}",
            format_count(self.word_count),
            format_count(self.char_count),
            format_count(self.line_count),
            self.reading_time()
        )
    }
}
