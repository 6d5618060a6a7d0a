// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::config::{ClipboardBackend, Config};
use crate::errors::ValidationError;

/// Validate a loaded configuration, collecting every problem found.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(tools) = &cfg.tools {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for tool in tools {
            if !seen.insert(*tool) && reported.insert(*tool) {
                errors.push(ValidationError::DuplicateTool { tool: *tool });
            }
        }
    }

    if cfg.clipboard.backend == ClipboardBackend::Command {
        if !has_program(&cfg.clipboard.read_command) {
            errors.push(ValidationError::MissingClipboardCommand {
                field: "read_command",
            });
        }
        if !has_program(&cfg.clipboard.write_command) {
            errors.push(ValidationError::MissingClipboardCommand {
                field: "write_command",
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn has_program(argv: &[String]) -> bool {
    argv.first().is_some_and(|program| !program.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolName;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_duplicate_reported_once() {
        let cfg = Config {
            tools: Some(vec![
                ToolName::SortLines,
                ToolName::SortLines,
                ToolName::SortLines,
            ]),
            ..Config::default()
        };
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateTool {
                tool: ToolName::SortLines
            }]
        );
    }

    #[test]
    fn test_command_backend_requires_both_commands() {
        let mut cfg = Config::default();
        cfg.clipboard.backend = ClipboardBackend::Command;
        cfg.clipboard.read_command = vec!["  ".to_string()];

        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::MissingClipboardCommand {
            field: "read_command"
        }));
        assert!(errors.contains(&ValidationError::MissingClipboardCommand {
            field: "write_command"
        }));
    }
}
