// src/lib.rs
//! Generates recording mocks and fluent verifiers for Go interfaces.
//!
//! The pipeline is: a [`loader::ModelLoader`] produces a [`model::Package`],
//! [`codegen::generate_source`] turns it into a [`syntax::SourceFile`], and
//! [`fmt`] prints and formats the text.

pub mod cli;
pub mod codegen;
pub mod commands;
pub mod errors;
pub mod fmt;
pub mod identity;
pub mod loader;
pub mod model;
pub mod syntax;
