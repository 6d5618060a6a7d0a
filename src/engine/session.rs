// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Host-agnostic model of the presentation layer.
//!
//! A `Session` owns the input and output buffers, applies tools through the
//! dispatcher and talks to the clipboard capability. Clipboard failures come
//! back as `Notice`s; they never touch the buffers and never propagate as
//! errors.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::engine::Dispatcher;
use crate::errors::DispatchError;
use crate::observability::messages::clipboard::{
    ClipboardOperation, ClipboardTransferred, ClipboardUnavailable,
};
use crate::observability::messages::tool::EmptyInputSkipped;
use crate::observability::messages::StructuredLog;
use crate::stats::{compute_stats, Stats};
use crate::traits::Clipboard;

/// Transient message for the user, shown as a toast or a stderr line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied,
    PermissionDenied,
    PasteFailed,
    CopyFailed,
    Cleared,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::Copied => "Copied Result!",
            Notice::PermissionDenied => "Permission denied to read clipboard",
            Notice::PasteFailed => "Could not read clipboard",
            Notice::CopyFailed => "Could not copy result",
            Notice::Cleared => "Cleared",
        };
        f.write_str(text)
    }
}

/// Result of asking the session to apply a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The output buffer now holds the transform result.
    Applied,
    /// The input buffer was empty; nothing ran and the output is unchanged.
    SkippedEmptyInput,
}

pub struct Session {
    dispatcher: Dispatcher,
    clipboard: Arc<dyn Clipboard>,
    input: String,
    output: String,
}

impl Session {
    pub fn new(dispatcher: Dispatcher, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            dispatcher,
            clipboard,
            input: String::new(),
            output: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Live statistics of the input buffer.
    pub fn stats(&self) -> Stats {
        compute_stats(&self.input)
    }

    pub fn apply(&mut self, tool: &str) -> Result<ApplyOutcome, DispatchError> {
        if self.input.is_empty() {
            EmptyInputSkipped { tool }.log();
            return Ok(ApplyOutcome::SkippedEmptyInput);
        }

        self.output = self.dispatcher.dispatch(tool, &self.input)?;
        Ok(ApplyOutcome::Applied)
    }

    /// Empty both buffers.
    pub fn clear(&mut self) -> Notice {
        self.input.clear();
        self.output.clear();
        Notice::Cleared
    }

    /// Replace the input buffer with the clipboard contents.
    ///
    /// Returns `None` on success. On failure the input is left as it was.
    pub async fn paste(&mut self) -> Option<Notice> {
        match self.clipboard.read_text().await {
            Ok(text) => {
                ClipboardTransferred {
                    backend: self.clipboard.name(),
                    operation: ClipboardOperation::Read,
                    size: text.len(),
                }
                .log();
                self.input = text;
                None
            }
            Err(e) => {
                ClipboardUnavailable {
                    backend: self.clipboard.name(),
                    operation: ClipboardOperation::Read,
                    error: &e,
                }
                .log();
                if e.is_permission_denied() {
                    Some(Notice::PermissionDenied)
                } else {
                    Some(Notice::PasteFailed)
                }
            }
        }
    }

    /// Write the output buffer to the clipboard.
    ///
    /// Returns `None` when there is no output to copy.
    pub async fn copy(&self) -> Option<Notice> {
        if self.output.is_empty() {
            return None;
        }

        let notice = match self.clipboard.write_text(&self.output).await {
            Ok(()) => {
                ClipboardTransferred {
                    backend: self.clipboard.name(),
                    operation: ClipboardOperation::Write,
                    size: self.output.len(),
                }
                .log();
                Notice::Copied
            }
            Err(e) => {
                ClipboardUnavailable {
                    backend: self.clipboard.name(),
                    operation: ClipboardOperation::Write,
                    error: &e,
                }
                .log();
                Notice::CopyFailed
            }
        };
        Some(notice)
    }
}
