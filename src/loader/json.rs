//! Loader for JSON serialized models.

use std::path::{Path, PathBuf};

use crate::errors::LoadError;
use crate::model::Package;

use super::{ModelLoader, select_interfaces};

/// Reads [`Package`] models written as JSON.
///
/// Namespace mode looks for `<model_root>/<import path>.json`.
#[derive(Debug, Clone)]
pub struct JsonModelLoader {
    model_root: PathBuf,
}

impl JsonModelLoader {
    pub fn new(model_root: impl Into<PathBuf>) -> Self {
        Self {
            model_root: model_root.into(),
        }
    }

    /// Model file for a namespace.
    pub fn namespace_path(&self, import_path: &str) -> PathBuf {
        self.model_root
            .join(format!("{}.json", import_path.trim_end_matches('/')))
    }

    fn parse(path: &Path, text: &str) -> Result<Package, LoadError> {
        let pkg: Package = serde_json::from_str(text).map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        pkg.validate()
            .map_err(|violation| LoadError::InvalidModel { violation })?;
        tracing::debug!(
            path = %path.display(),
            package = %pkg.name,
            interfaces = pkg.interfaces.len(),
            "loaded model"
        );
        Ok(pkg)
    }
}

impl Default for JsonModelLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ModelLoader for JsonModelLoader {
    fn load_file(&self, path: &Path) -> Result<Package, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    fn load_namespace(&self, import_path: &str, names: &[String]) -> Result<Package, LoadError> {
        let path = self.namespace_path(import_path);
        let text =
            std::fs::read_to_string(&path).map_err(|source| LoadError::UnresolvedNamespace {
                namespace: import_path.to_string(),
                path: path.clone(),
                source,
            })?;
        let pkg = Self::parse(&path, &text)?;
        select_interfaces(pkg, import_path, names)
    }
}
