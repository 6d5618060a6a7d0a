// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for tool dispatch and transform execution.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Transform execution started.
///
/// # Log Level
/// `debug!` - Per-invocation detail
///
/// # Example
/// ```
/// use the_textkit::observability::messages::tool::ToolExecutionStarted;
///
/// let msg = ToolExecutionStarted {
///     tool: "trim-space",
///     input_size: 1024,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ToolExecutionStarted<'a> {
    pub tool: &'a str,
    pub input_size: usize,
}

impl Display for ToolExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' execution started: input_size={} bytes",
            self.tool, self.input_size
        )
    }
}

impl StructuredLog for ToolExecutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(tool = self.tool, input_size = self.input_size, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "tool_execution",
            name = name,
            tool = self.tool,
            input_size = self.input_size,
        )
    }
}

/// Transform execution completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ToolExecutionCompleted<'a> {
    pub tool: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for ToolExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.tool, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ToolExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            tool = self.tool,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}",
            self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "tool_execution",
            name = name,
            tool = self.tool,
            output_size = self.output_size,
        )
    }
}

/// A requested tool could not be resolved.
///
/// # Log Level
/// `warn!` - User error, recoverable
pub struct ToolLookupFailed<'a> {
    pub requested: &'a str,
    pub reason: &'a str,
}

impl Display for ToolLookupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Tool lookup for '{}' failed: {}", self.requested, self.reason)
    }
}

impl StructuredLog for ToolLookupFailed<'_> {
    fn log(&self) {
        tracing::warn!(requested = self.requested, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "tool_lookup",
            name = name,
            requested = self.requested,
        )
    }
}

/// A tool invocation was skipped because the input buffer is empty.
///
/// # Log Level
/// `debug!`
pub struct EmptyInputSkipped<'a> {
    pub tool: &'a str,
}

impl Display for EmptyInputSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Tool '{}' skipped: input is empty", self.tool)
    }
}

impl StructuredLog for EmptyInputSkipped<'_> {
    fn log(&self) {
        tracing::debug!(tool = self.tool, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::DEBUG, "tool_skipped", name = name, tool = self.tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        let started = ToolExecutionStarted {
            tool: "sort-lines",
            input_size: 12,
        };
        assert_eq!(
            started.to_string(),
            "Tool 'sort-lines' execution started: input_size=12 bytes"
        );

        let skipped = EmptyInputSkipped { tool: "upper-case" };
        assert_eq!(skipped.to_string(), "Tool 'upper-case' skipped: input is empty");
    }
}
