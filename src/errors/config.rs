// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ToolName;

/// Problems found while validating a loaded configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The same tool appears more than once in the `tools` list.
    #[error("Duplicate tool in configuration: '{tool}'")]
    DuplicateTool { tool: ToolName },

    /// The `command` clipboard backend needs both commands, each non-empty.
    #[error("Clipboard backend 'command' requires a non-empty '{field}'")]
    MissingClipboardCommand { field: &'static str },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_joins_messages() {
        let err = ConfigError::Validation(vec![
            ValidationError::DuplicateTool {
                tool: ToolName::TrimSpace,
            },
            ValidationError::MissingClipboardCommand {
                field: "read_command",
            },
        ]);

        let msg = err.to_string();
        assert!(msg.starts_with("Configuration validation failed:"));
        assert!(msg.contains("Duplicate tool in configuration: 'trim-space'"));
        assert!(msg.contains("requires a non-empty 'read_command'"));
    }
}
