//! # LLM TextFix
//!
//! Detect and replace the typographic characters that language-model output
//! is full of: smart quotes, en and em dashes, non-breaking and other
//! invisible spaces, line/paragraph separators and the ellipsis.
//!
//! ## Core Features
//!
//! - **Fixed character table**: 27 code points, each with a name, a category
//!   (quote, dash, space, punctuation) and an ASCII replacement
//! - **Count**: how many problematic characters a text contains
//! - **Replace**: swap every problematic character for its ASCII equivalent
//! - **Annotate**: HTML-escaped rendering with each problematic character
//!   wrapped in a highlight span carrying a `Name → replacement` tooltip
//!
//! All operations are pure functions over `&str`, linear in the input length,
//! and safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```
//! use llm_textfix::{annotate, count, replace};
//!
//! let text = "\u{201C}Hello\u{201D} \u{2014} it\u{2019}s 2023\u{2013}2024\u{2026}";
//!
//! assert_eq!(count(text), 6);
//! assert_eq!(replace(text), "\"Hello\" - it's 2023-2024...");
//!
//! let html = annotate(text);
//! assert!(html.contains("title='Em dash \u{2192} -'"));
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Character table
pub mod table;

// Transforms
pub mod escape;
pub mod style;
pub mod transform;

// Reporting
pub mod report;
pub mod sample;

// Configuration
pub mod config;

// Re-exports
pub use error::{Error, Result};
pub use report::TextReport;
pub use style::{ClassPrefixStyle, HighlightStyle, TailwindStyle};
pub use table::{lookup, Category, CharacterEntry};
pub use transform::{annotate, annotate_with, count, find_all, replace, Occurrence, Segment};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
