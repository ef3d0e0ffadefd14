// src/cli/mod.rs
pub mod args;
pub mod paths;

pub use args::{Cli, FormatterKind};
pub use paths::{InputMode, output_file_path};
