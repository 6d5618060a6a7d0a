// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for clipboard capability outcomes.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Which clipboard operation a message describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOperation {
    Read,
    Write,
}

impl ClipboardOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardOperation::Read => "read",
            ClipboardOperation::Write => "write",
        }
    }
}

/// Clipboard operation succeeded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_textkit::observability::messages::clipboard::{ClipboardOperation, ClipboardTransferred};
///
/// let msg = ClipboardTransferred {
///     backend: "memory",
///     operation: ClipboardOperation::Read,
///     size: 42,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ClipboardTransferred<'a> {
    pub backend: &'a str,
    pub operation: ClipboardOperation,
    pub size: usize,
}

impl Display for ClipboardTransferred<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Clipboard {} via '{}' succeeded: {} bytes",
            self.operation.as_str(),
            self.backend,
            self.size
        )
    }
}

impl StructuredLog for ClipboardTransferred<'_> {
    fn log(&self) {
        tracing::info!(
            backend = self.backend,
            operation = self.operation.as_str(),
            size = self.size,
            "{}",
            self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "clipboard",
            name = name,
            backend = self.backend,
            operation = self.operation.as_str(),
        )
    }
}

/// Clipboard operation was refused or failed. Never fatal.
///
/// # Log Level
/// `warn!` - Degraded, reported to the user as a notice
pub struct ClipboardUnavailable<'a> {
    pub backend: &'a str,
    pub operation: ClipboardOperation,
    pub error: &'a dyn std::error::Error,
}

impl Display for ClipboardUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Clipboard {} via '{}' failed: {}",
            self.operation.as_str(),
            self.backend,
            self.error
        )
    }
}

impl StructuredLog for ClipboardUnavailable<'_> {
    fn log(&self) {
        tracing::warn!(
            backend = self.backend,
            operation = self.operation.as_str(),
            error = %self.error,
            "{}",
            self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "clipboard",
            name = name,
            backend = self.backend,
            operation = self.operation.as_str(),
        )
    }
}
