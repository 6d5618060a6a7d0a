// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod clipboard;
mod config;
mod dispatch;

pub use clipboard::ClipboardError;
pub use config::{ConfigError, ValidationError};
pub use dispatch::DispatchError;
