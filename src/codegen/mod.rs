// src/codegen/mod.rs
//! Mock generation: model in, Go syntax tree out.
//!
//! [`generate_source`] resolves import aliases and runs the mock and verifier
//! emitters over every interface. [`generate_output`] adds printing and the
//! formatter pass.

mod context;
mod mock;
mod signature;
mod verifier;

use crate::errors::{FormatFailure, GenerateError, MockgenError};
use crate::fmt::{CANONICAL, SourceFormatter};
use crate::identity::AliasTable;
use crate::model::Package;
use crate::syntax::{Import, SourceFile};

use context::Context;
use mock::emit_mock;
use verifier::emit_verifier;

/// Import path of the runtime reflection package used for output types.
pub const REFLECT_PATH: &str = "reflect";

/// The Go invocation-recording library generated code is written against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderLibrary {
    pub import_path: String,
    /// Exported failure handler wired by the zero-argument constructor.
    pub fail_handler_default: String,
}

impl Default for RecorderLibrary {
    fn default() -> Self {
        Self {
            import_path: "github.com/petergtz/pegomock".to_string(),
            fail_handler_default: "GlobalFailHandler".to_string(),
        }
    }
}

/// Per-run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Package clause of the generated file.
    pub package_out: String,
    /// Import path the generated file lives in. Types from it are rendered
    /// unqualified and it never appears in the import block.
    pub self_package: Option<String>,
    /// Provenance written to the `// Source:` header line.
    pub source: String,
    pub recorder: RecorderLibrary,
}

impl GenerateOptions {
    pub fn new(package_out: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            package_out: package_out.into(),
            self_package: None,
            source: source.into(),
            recorder: RecorderLibrary::default(),
        }
    }
}

/// Build the syntax tree of the mock file for every interface in `pkg`.
#[tracing::instrument(skip_all, fields(package = %pkg.name, out = %options.package_out))]
pub fn generate_source(pkg: &Package, options: &GenerateOptions) -> Result<SourceFile, GenerateError> {
    for iface in &pkg.interfaces {
        if let Some(embedded) = iface.embedded.first() {
            return Err(GenerateError::EmbeddedInterface {
                interface: iface.name.clone(),
                embedded: embedded.to_string(),
            });
        }
    }

    let aliases = resolve_aliases(pkg, options);
    tracing::debug!(aliases = aliases.len(), "resolved import aliases");
    let ctx = Context::new(&aliases, options);

    let mut decls = Vec::new();
    for iface in &pkg.interfaces {
        tracing::debug!(interface = %iface.name, methods = iface.methods.len(), "emitting mock");
        emit_mock(&ctx, iface, &mut decls)?;
        emit_verifier(&ctx, iface, &mut decls)?;
    }

    Ok(SourceFile {
        header: vec![
            "Code generated by mockgen. DO NOT EDIT.".to_string(),
            format!("Source: {}", options.source),
        ],
        package: options.package_out.clone(),
        imports: import_block(pkg, options, &aliases),
        decls,
    })
}

/// Generate, print and format the mock file.
///
/// A formatter rejection is fatal and carries the unformatted text.
pub fn generate_output(
    pkg: &Package,
    options: &GenerateOptions,
    formatter: &dyn SourceFormatter,
) -> Result<String, MockgenError> {
    let file = generate_source(pkg, options)?;
    let raw = crate::fmt::render(&file, CANONICAL).map_err(GenerateError::Render)?;
    match formatter.format(&raw) {
        Ok(result) => {
            tracing::debug!(changed = result.changed, bytes = result.output.len(), "formatted mock source");
            Ok(result.output)
        }
        Err(err) => Err(FormatFailure {
            diagnostic: err.to_string(),
            raw,
        }
        .into()),
    }
}

/// Fixed runtime paths first, then every model path in sorted order.
fn resolve_aliases(pkg: &Package, options: &GenerateOptions) -> AliasTable {
    let mut paths = pkg.required_imports();
    if let Some(self_package) = &options.self_package {
        paths.insert(self_package.clone());
    }

    let mut table = AliasTable::new();
    table.allocate(&options.recorder.import_path);
    table.allocate(REFLECT_PATH);
    for path in &paths {
        table.allocate(path);
    }
    table
}

/// Recorder, `reflect`, the referenced model paths by path, then dot
/// imports. Paths nothing in the file uses are left out.
fn import_block(pkg: &Package, options: &GenerateOptions, aliases: &AliasTable) -> Vec<Import> {
    let recorder = options.recorder.import_path.as_str();
    let referenced = pkg.referenced_imports();
    let spec = |path: &str| Import {
        name: aliases.alias_of(path).map(str::to_string),
        path: path.to_string(),
    };

    let mut imports = Vec::new();
    if !pkg.interfaces.is_empty() {
        imports.push(spec(recorder));
    }
    if pkg.interfaces.iter().any(|iface| !iface.methods.is_empty()) {
        imports.push(spec(REFLECT_PATH));
    }
    for (path, _) in aliases.iter() {
        if path == recorder
            || path == REFLECT_PATH
            || Some(path) == options.self_package.as_deref()
            || !referenced.contains(path)
        {
            continue;
        }
        imports.push(spec(path));
    }
    for path in &pkg.dot_imports {
        imports.push(Import {
            name: Some(".".to_string()),
            path: path.clone(),
        });
    }
    imports
}

#[cfg(test)]
mod tests;
