// src/errors/mod.rs
//! Structured error reporting for mock generation.
//!
//! This module provides error types using miette for fancy diagnostics.
//!
//! Error code ranges:
//! - E1xxx: loading the model and command-line arity
//! - E2xxx: generation
//! - E3xxx: formatting
//! - E4xxx: output

#![allow(unused_assignments)] // False positives from thiserror derive

pub mod report;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::model::{ModelViolation, TypeRenderError};

pub use report::{render_to_stderr, render_to_string, render_to_writer};

/// A front-end could not produce a usable model.
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("could not read model file '{}'", .path.display())]
    #[diagnostic(code(E1001))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model in '{}': {message}", .path.display())]
    #[diagnostic(code(E1002), help("the model is a JSON serialized package description"))]
    Malformed { path: PathBuf, message: String },

    #[error("namespace '{namespace}' could not be resolved (looked for '{}')", .path.display())]
    #[diagnostic(
        code(E1003),
        help("export the namespace model under --model-root, or pass the model file directly")
    )]
    UnresolvedNamespace {
        namespace: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("interface(s) {missing} not found in namespace '{namespace}'")]
    #[diagnostic(code(E1005))]
    MissingInterfaces { namespace: String, missing: String },

    #[error("invalid model: {violation}")]
    #[diagnostic(code(E1006))]
    InvalidModel { violation: ModelViolation },
}

/// An emission invariant was violated while building the mock.
#[derive(Error, Debug, Diagnostic)]
pub enum GenerateError {
    #[error("cannot render a type in {interface}.{method}: {source}")]
    #[diagnostic(
        code(E2001),
        help("every named type's package must be listed among the model's imports")
    )]
    UnresolvedType {
        interface: String,
        method: String,
        #[source]
        source: TypeRenderError,
    },

    #[error("interface '{interface}' embeds '{embedded}'; embedded interfaces are not supported")]
    #[diagnostic(
        code(E2002),
        help("flatten embedded interfaces into the model before generating")
    )]
    EmbeddedInterface { interface: String, embedded: String },

    #[error("could not render the generated syntax tree")]
    #[diagnostic(code(E2003))]
    Render(#[source] std::fmt::Error),
}

/// The generated text was rejected by the formatter.
///
/// Carries the unformatted text so the offending code can be inspected.
#[derive(Error, Debug, Diagnostic)]
#[error("failed to format generated source code: {diagnostic}\n{raw}")]
#[diagnostic(code(E3001))]
pub struct FormatFailure {
    pub diagnostic: String,
    pub raw: String,
}

/// Top-level error for one generation invocation.
#[derive(Error, Debug, Diagnostic)]
pub enum MockgenError {
    #[error("loading input failed")]
    #[diagnostic(code(E1000))]
    Load(#[from] LoadError),

    #[error("expected exactly two arguments, but got {count}: {args:?}")]
    #[diagnostic(
        code(E1004),
        help("namespace mode takes an import path and a comma-separated list of interface names")
    )]
    Arity { count: usize, args: Vec<String> },

    #[error("failed generating mock")]
    #[diagnostic(code(E2000))]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatFailure),

    #[error("failed writing to destination '{}'", .path.display())]
    #[diagnostic(code(E4001))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed printing the model")]
    #[diagnostic(code(E4002))]
    Debug(#[source] std::io::Error),
}
