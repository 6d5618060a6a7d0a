// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod extract_emails;
pub mod fix_quotes;
pub mod sentence_case;
pub mod smart_unwrap;
pub mod sort_lines;
pub mod strip_html;
pub mod title_case;
pub mod trim_space;
pub mod upper_case;

pub use extract_emails::*;
pub use fix_quotes::*;
pub use sentence_case::*;
pub use smart_unwrap::*;
pub use sort_lines::*;
pub use strip_html::*;
pub use title_case::*;
pub use trim_space::*;
pub use upper_case::*;
