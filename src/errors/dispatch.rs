// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for resolving a tool name to a registered transform.

use thiserror::Error;

use crate::config::ToolName;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The requested name is not one of the known tools.
    #[error("Unknown tool: '{requested}'")]
    UnknownTool { requested: String },

    /// The tool exists but the active configuration does not enable it.
    #[error("Tool '{tool}' is not enabled in this configuration")]
    ToolDisabled { tool: ToolName },
}
