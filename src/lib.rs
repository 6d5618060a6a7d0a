// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // transforms, html parser, clipboards
pub mod cli;        // command-line host
pub mod config;     // config + registry
pub mod engine;     // dispatcher + session
pub mod errors;     // error handling
pub mod observability;
pub mod stats;      // live statistics
pub mod traits;     // unified abstractions
