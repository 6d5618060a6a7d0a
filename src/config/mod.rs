// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod tool_name;
mod tool_registry;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, ClipboardBackend, ClipboardConfig, Config,
    LoggingConfig,
};
pub use tool_name::{ToolCategory, ToolName};
pub use tool_registry::ToolRegistry;
pub use validation::validate_config;
