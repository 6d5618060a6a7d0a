// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by clipboard capabilities.
//!
//! None of these are fatal. The session turns each one into a user notice and
//! leaves its buffers untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The host refused access to the clipboard.
    #[error("clipboard access denied by host: {reason}")]
    PermissionDenied { reason: String },

    /// No clipboard is reachable from this host (missing tool, headless session).
    #[error("clipboard unavailable: {reason}")]
    Unavailable { reason: String },

    /// The external clipboard command ran but reported failure.
    #[error("clipboard command '{command}' failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClipboardError {
    pub fn permission_denied(reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            reason: reason.into(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether the failure is a host permission refusal rather than a fault.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            ClipboardError::PermissionDenied { .. } => true,
            ClipboardError::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}
