// src/fmt/mod.rs
//! Go source printing and formatting.
//!
//! The printer renders a [`crate::syntax::SourceFile`] in canonical gofmt
//! layout; a [`SourceFormatter`] then validates and normalizes the text.

mod config;
mod formatter;
mod printer;

pub use config::{CANONICAL, FormatConfig};
pub use formatter::{Canonical, FormatError, FormatResult, Gofmt, SourceFormatter};
pub use printer::{print_file, render};
