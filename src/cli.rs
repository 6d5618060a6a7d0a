// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command-line host: argument definitions and log filter selection.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::consts::DEFAULT_LOG_FILTER;

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "the-textkit",
    version,
    about = "Plain-text cleanup toolkit: unwrap, trim, recase, sort, strip HTML, extract emails"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// YAML configuration file.
    #[arg(global = true, short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available tools, grouped like the toolbar.
    List,
    /// Apply one tool to the input and print the result.
    Apply(ApplyArgs),
    /// Print word, character and line counts plus reading time.
    Stats(StatsArgs),
}

/// Where the input buffer is filled from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input text. Read from stdin when omitted.
    pub text: Option<String>,
    /// Take the input from the clipboard.
    #[arg(long, conflicts_with = "text")]
    pub paste: bool,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Tool name, e.g. smart-unwrap or extract-emails.
    pub tool: String,
    #[command(flatten)]
    pub input: InputArgs,
    /// Also write the result to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Emit JSON instead of the one-line summary.
    #[arg(long)]
    pub json: bool,
}

/// Pick the log filter: `RUST_LOG`, then `-v`, then the config, then the default.
///
/// Returns the filter and whether it may still be replaced by the config.
pub fn log_filter(rust_log: Option<&str>, verbose: u8, configured: Option<&str>) -> (String, bool) {
    if let Some(filter) = rust_log.filter(|f| !f.trim().is_empty()) {
        return (filter.to_string(), false);
    }
    let by_verbosity = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    if let Some(filter) = by_verbosity {
        return (filter.to_string(), false);
    }
    match configured {
        Some(filter) => (filter.to_string(), false),
        None => (DEFAULT_LOG_FILTER.to_string(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_apply_with_flags() {
        let cli = Cli::try_parse_from([
            "the-textkit",
            "-vv",
            "--config",
            "configs/x11.yaml",
            "apply",
            "sort-lines",
            "--paste",
            "--copy",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("configs/x11.yaml")));
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.tool, "sort-lines");
                assert!(args.input.paste);
                assert!(args.input.text.is_none());
                assert!(args.copy);
            }
            other => panic!("expected apply, got {:?}", other),
        }
    }

    #[test]
    fn test_paste_conflicts_with_text() {
        let result = Cli::try_parse_from(["the-textkit", "stats", "some text", "--paste"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter_precedence() {
        assert_eq!(log_filter(Some("trace"), 1, Some("info")), ("trace".to_string(), false));
        assert_eq!(log_filter(Some("  "), 1, None), ("info".to_string(), false));
        assert_eq!(log_filter(None, 3, Some("error")), ("trace".to_string(), false));
        assert_eq!(log_filter(None, 0, Some("error")), ("error".to_string(), false));
        assert_eq!(log_filter(None, 0, None), ("warn".to_string(), true));
    }
}
