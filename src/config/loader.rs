// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ToolName;
use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigLoaded, ConfigValidationFailed};
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for the toolkit host.
///
/// Every section is optional; an empty file yields the defaults (all tools
/// enabled, clipboard disabled, no log filter override).
///
/// # Fields
/// * `tools` - Subset of tools to register (optional, defaults to every tool)
/// * `clipboard` - Which clipboard capability the host provides
/// * `logging` - Log filter used when `RUST_LOG` is not set
///
/// # Example
/// ```yaml
/// tools: [smart-unwrap, trim-space, strip-html]
/// clipboard:
///   backend: command
///   read_command: [wl-paste, --no-newline]
///   write_command: [wl-copy]
/// logging:
///   filter: info
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tools: Option<Vec<ToolName>>,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Tools the registry should expose, in configuration order.
    pub fn enabled_tools(&self) -> Vec<ToolName> {
        match &self.tools {
            Some(tools) => tools.clone(),
            None => ToolName::ALL.to_vec(),
        }
    }
}

/// Clipboard capability configuration.
///
/// # Example
/// ```yaml
/// clipboard:
///   backend: command
///   read_command: [xclip, -selection, clipboard, -o]
///   write_command: [xclip, -selection, clipboard]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
    /// argv of the command whose stdout is the clipboard text
    #[serde(default)]
    pub read_command: Vec<String>,
    /// argv of the command that takes the new clipboard text on stdin
    #[serde(default)]
    pub write_command: Vec<String>,
}

/// Clipboard backend type.
///
/// # Variants
/// * `Command` - Shell out to host clipboard tools (`wl-copy`, `xclip`, `pbcopy`)
/// * `Memory` - Process-local clipboard, useful for headless runs and tests
/// * `Disabled` - Every read is refused, every write fails
#[derive(Debug, Default, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardBackend {
    Command,
    Memory,
    #[default]
    Disabled,
}

impl ClipboardBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardBackend::Command => "command",
            ClipboardBackend::Memory => "memory",
            ClipboardBackend::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // serde_yaml rejects an empty document for a struct
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;
    let path_display = path.display().to_string();

    if let Err(errors) = crate::config::validate_config(&cfg) {
        ConfigValidationFailed {
            path: &path_display,
            error_count: errors.len(),
        }
        .log();
        return Err(ConfigError::Validation(errors));
    }

    ConfigLoaded {
        path: &path_display,
        tool_count: cfg.enabled_tools().len(),
        clipboard_backend: cfg.clipboard.backend.as_str(),
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
tools: [smart-unwrap, extract-emails]
clipboard:
  backend: command
  read_command: [wl-paste, --no-newline]
  write_command: [wl-copy]
logging:
  filter: debug
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            cfg.enabled_tools(),
            vec![ToolName::SmartUnwrap, ToolName::ExtractEmails]
        );
        assert_eq!(cfg.clipboard.backend, ClipboardBackend::Command);
        assert_eq!(cfg.clipboard.read_command, vec!["wl-paste", "--no-newline"]);
        assert_eq!(cfg.logging.filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_defaults_enable_everything() {
        let cfg: Config = serde_yaml::from_str("logging: {}").unwrap();
        assert_eq!(cfg.enabled_tools(), ToolName::ALL.to_vec());
        assert_eq!(cfg.clipboard.backend, ClipboardBackend::Disabled);
        assert!(cfg.logging.filter.is_none());
    }

    #[test]
    fn test_empty_file_loads_defaults() {
        let file = write_config("   \n");
        let cfg = load_config(file.path()).unwrap();
        assert!(cfg.tools.is_none());
    }

    #[test]
    fn test_unknown_tool_is_a_parse_error() {
        let file = write_config("tools: [lower-case]\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_and_validate_rejects_duplicates() {
        let file = write_config("tools: [trim-space, upper-case, trim-space]\n");
        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains("Duplicate tool in configuration: 'trim-space'"));
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config(
            r#"
clipboard:
  backend: memory
"#,
        );
        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.clipboard.backend, ClipboardBackend::Memory);
    }
}
