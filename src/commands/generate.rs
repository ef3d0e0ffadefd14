// src/commands/generate.rs
//! Load a model, generate the mock and write it out.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::{Cli, FormatterKind, InputMode, output_file_path};
use crate::codegen::{GenerateOptions, RecorderLibrary, generate_output};
use crate::errors::{MockgenError, render_to_stderr};
use crate::fmt::{Canonical, Gofmt, SourceFormatter};
use crate::loader::{JsonModelLoader, ModelLoader};

/// Where the mock ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

/// Run the generator for parsed arguments, rendering any error to stderr.
pub fn run_generate(cli: &Cli) -> ExitCode {
    let stdout = io::stdout();
    match generate(cli, &mut stdout.lock()) {
        Ok(Destination::File(path)) => {
            tracing::info!(path = %path.display(), "wrote mock");
            ExitCode::SUCCESS
        }
        Ok(Destination::Stdout) => ExitCode::SUCCESS,
        Err(err) => {
            render_to_stderr(&err);
            ExitCode::FAILURE
        }
    }
}

/// Load, generate and write. Debug dumps and `--stdout` output go to `out`.
#[tracing::instrument(skip_all, fields(args = ?cli.args))]
pub fn generate(cli: &Cli, out: &mut dyn Write) -> Result<Destination, MockgenError> {
    let mode = InputMode::from_args(&cli.args).inspect_err(|err| {
        tracing::error!(%err, "wrong number of arguments");
    })?;

    let loader = JsonModelLoader::new(&cli.model_root);
    let pkg = match &mode {
        InputMode::SingleFile(path) => loader.load_file(path)?,
        InputMode::Namespace { import_path, names } => loader.load_namespace(import_path, names)?,
    };

    if cli.debug {
        pkg.print(out).map_err(MockgenError::Debug)?;
    }

    let options = GenerateOptions {
        package_out: cli.package.clone().unwrap_or_else(|| pkg.name.clone()),
        self_package: cli.self_package.clone(),
        source: mode.source(),
        recorder: RecorderLibrary {
            fail_handler_default: cli.fail_handler.clone(),
            ..RecorderLibrary::default()
        },
    };
    let formatter = formatter(cli.formatter);
    let output = generate_output(&pkg, &options, formatter.as_ref())?;

    if cli.stdout {
        out.write_all(output.as_bytes())
            .map_err(|source| MockgenError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        return Ok(Destination::Stdout);
    }

    let path = output_file_path(&cli.args, &cli.output_dir, cli.output.as_deref());
    write_file(&path, &output)?;
    Ok(Destination::File(path))
}

fn formatter(kind: FormatterKind) -> Box<dyn SourceFormatter> {
    match kind {
        FormatterKind::Canonical => Box::new(Canonical),
        FormatterKind::Gofmt => Box::new(Gofmt::default()),
    }
}

fn write_file(path: &std::path::Path, contents: &str) -> Result<(), MockgenError> {
    let write_error = |source| MockgenError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)
}
