// src/cli/paths.rs
//
// Input mode detection and output path derivation.

use std::path::{Path, PathBuf};

use crate::errors::MockgenError;
use crate::loader::parse_names;

/// How the positional arguments are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// One model file.
    SingleFile(PathBuf),
    /// An import path and the interfaces to mock from it.
    Namespace {
        import_path: String,
        names: Vec<String>,
    },
}

impl InputMode {
    /// A single argument with a file extension selects single-file mode;
    /// anything else must be exactly an import path and a name list.
    pub fn from_args(args: &[String]) -> Result<Self, MockgenError> {
        if let [file] = args
            && Path::new(file).extension().is_some()
        {
            return Ok(InputMode::SingleFile(PathBuf::from(file)));
        }
        match args {
            [import_path, names] => Ok(InputMode::Namespace {
                import_path: import_path.clone(),
                names: parse_names(names),
            }),
            _ => Err(MockgenError::Arity {
                count: args.len(),
                args: args.to_vec(),
            }),
        }
    }

    /// Provenance written to the generated header.
    pub fn source(&self) -> String {
        match self {
            InputMode::SingleFile(path) => path.display().to_string(),
            InputMode::Namespace { import_path, names } => {
                format!("{} (interfaces: {})", import_path, names.join(", "))
            }
        }
    }
}

/// Destination of the generated file.
///
/// An explicit `output` wins. Otherwise the name is derived from the last
/// argument: `mock_<file stem>_test.go` for a model file, and
/// `mock_<lower-cased name list>_test.go` in namespace mode.
pub fn output_file_path(args: &[String], output_dir: &Path, output: Option<&Path>) -> PathBuf {
    if let Some(output) = output {
        return output.to_path_buf();
    }
    let last = args.last().map(String::as_str).unwrap_or_default();
    let stem = match InputMode::from_args(args) {
        Ok(InputMode::SingleFile(path)) => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        _ => last.to_lowercase(),
    };
    output_dir.join(format!("mock_{}_test.go", stem))
}
