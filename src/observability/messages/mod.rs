// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message implements `Display` for the human-readable line and
//! `StructuredLog` to emit that line with structured fields at the level
//! documented on the type.

use std::fmt::Display;
use tracing::Span;

pub mod clipboard;
pub mod config;
pub mod tool;

/// A log message that knows its level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message at its documented level.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
