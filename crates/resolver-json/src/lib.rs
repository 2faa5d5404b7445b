//! JSON fragment formatting for Resolver responses.
//!
//! Resolver responses arrive as compact JSON. This crate re-emits them with
//! newlines and tab indentation for display and logging, using a single
//! forward scan and a stack of open objects and arrays. No document tree is
//! built, and the input is never parsed into values.
//!
//! # Usage
//!
//! ```rust
//! use resolver_json::format_fragment;
//!
//! let formatted = format_fragment(r#"{"Status":"OK","Cell":"cell-east-2"}"#).unwrap();
//! assert_eq!(formatted, "{\n\t\"Status\" : \"OK\",\t\n\t\"Cell\" : \"cell-east-2\"\n}");
//! ```
//!
//! # Modules
//!
//! - [`cell`] - Handling cell lookup in formatted responses
//! - [`error`] - Formatting error types
//! - [`format`] - The single-pass formatter

pub mod cell;
pub mod error;
pub mod format;

pub use cell::cell_name;
pub use error::FormatError;
pub use format::{format_fragment, format_optional_fragment};
