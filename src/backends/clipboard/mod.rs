// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Clipboard capability backends.
//!
//! * `MemoryClipboard` - process-local buffer, for headless hosts and tests
//! * `CommandClipboard` - shells out to host tools such as `wl-copy`/`wl-paste`,
//!   `xclip` or `pbcopy`/`pbpaste`
//! * `DisabledClipboard` - a host that grants no clipboard access

mod command;
mod disabled;
mod memory;

pub use command::CommandClipboard;
pub use disabled::DisabledClipboard;
pub use memory::MemoryClipboard;

use std::sync::Arc;

use crate::config::{ClipboardBackend, ClipboardConfig};
use crate::traits::Clipboard;

/// Factory for creating the clipboard capability named in configuration
pub struct ClipboardFactory;

impl ClipboardFactory {
    pub fn from_config(cfg: &ClipboardConfig) -> Arc<dyn Clipboard> {
        match cfg.backend {
            ClipboardBackend::Command => Arc::new(CommandClipboard::new(
                cfg.read_command.clone(),
                cfg.write_command.clone(),
            )),
            ClipboardBackend::Memory => Arc::new(MemoryClipboard::new()),
            ClipboardBackend::Disabled => Arc::new(DisabledClipboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_picks_backend() {
        let mut cfg = ClipboardConfig::default();
        assert_eq!(ClipboardFactory::from_config(&cfg).name(), "disabled");

        cfg.backend = ClipboardBackend::Memory;
        assert_eq!(ClipboardFactory::from_config(&cfg).name(), "memory");

        cfg.backend = ClipboardBackend::Command;
        cfg.read_command = vec!["pbpaste".to_string()];
        cfg.write_command = vec!["pbcopy".to_string()];
        assert_eq!(ClipboardFactory::from_config(&cfg).name(), "command");
    }
}
