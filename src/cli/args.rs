// src/cli/args.rs

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::commands::version::version_string;

/// Formatter applied to the generated source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatterKind {
    /// Built-in balance check only; does not parse Go
    #[default]
    Canonical,
    /// Pipe through an external gofmt
    Gofmt,
}

/// Generate Go mocks with a fluent verification API from interface models
#[derive(Parser, Debug)]
#[command(name = "mockgen")]
#[command(version = version_string())]
#[command(about = "Generate Go mocks from interface models", long_about = None)]
pub struct Cli {
    /// A model file, or an import path followed by a comma-separated list of
    /// interface names
    #[arg(value_name = "ARGS", required = true)]
    pub args: Vec<String>,

    /// Directory the mock file is written to
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Output file; overrides the derived name and --output-dir
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Package of the generated source (defaults to the model's package)
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Import path the generated file lives in; its types are not qualified
    #[arg(long, value_name = "PATH")]
    pub self_package: Option<String>,

    /// Print the loaded model before generating
    #[arg(long)]
    pub debug: bool,

    /// Root directory of namespace models (`<root>/<import path>.json`)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub model_root: PathBuf,

    /// Formatter applied to the generated source. Only `gofmt` parses the
    /// output, so only it rejects generated code that is not valid Go
    #[arg(long, value_enum, default_value_t = FormatterKind::Canonical)]
    pub formatter: FormatterKind,

    /// Recorder failure handler wired by the default constructor
    #[arg(long, value_name = "NAME", default_value = "GlobalFailHandler")]
    pub fail_handler: String,

    /// Write the mock to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}
