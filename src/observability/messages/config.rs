// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file loaded and validated.
///
/// # Log Level
/// `info!`
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub tool_count: usize,
    pub clipboard_backend: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}': {} tools enabled, clipboard backend '{}'",
            self.path, self.tool_count, self.clipboard_backend
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            tool_count = self.tool_count,
            clipboard_backend = self.clipboard_backend,
            "{}",
            self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::INFO, "config", name = name, path = self.path)
    }
}

/// Configuration file failed validation.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigValidationFailed<'a> {
    pub path: &'a str,
    pub error_count: usize,
}

impl Display for ConfigValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Config '{}' failed validation with {} error(s)",
            self.path, self.error_count
        )
    }
}

impl StructuredLog for ConfigValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "config",
            name = name,
            path = self.path,
            error_count = self.error_count,
        )
    }
}
