// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Implementations behind the toolkit's traits.
//!
//! # Available Backends
//!
//! ## Local
//! In-process Rust transforms, one per catalog tool:
//! - **Format**: smart-unwrap, trim-space, fix-quotes
//! - **Transform**: sent-case, title-case, upper-case, sort-lines
//! - **Clean**: strip-html, extract-emails
//!
//! ## HTML
//! `ScraperTextExtractor`, the default `HtmlTextExtractor`, built on the
//! html5ever parser so entity decoding and error recovery follow the HTML
//! standard.
//!
//! ## Clipboard
//! Memory, external-command and disabled implementations of `Clipboard`,
//! chosen by `ClipboardFactory` from configuration.
//!
//! # Architecture
//!
//! ```text
//! Configuration → Factory → Arc<dyn Transform> / Arc<dyn Clipboard> → Session
//! ```

pub mod clipboard;
pub mod html;
pub mod local;
