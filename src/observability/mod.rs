// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for diagnostic and
//! operational logging throughout the toolkit. Message types follow a
//! struct-based pattern with `Display` implementations to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between log lines and spans
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::tool` - Tool dispatch and transform execution events
//! * `messages::clipboard` - Clipboard capability outcomes
//! * `messages::config` - Configuration loading and validation
//!
//! # Usage
//!
//! ```rust
//! use the_textkit::observability::messages::tool::ToolLookupFailed;
//! use the_textkit::observability::messages::StructuredLog;
//!
//! let msg = ToolLookupFailed {
//!     requested: "lower-case",
//!     reason: "Unknown tool: 'lower-case'",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
