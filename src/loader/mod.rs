//! Model loading.
//!
//! Handles:
//! - Single-file mode: one serialized model file
//! - Namespace mode: a model looked up by import path, filtered to the
//!   requested interfaces
//! - Validation of the loaded model

mod json;

use std::path::Path;

use crate::errors::LoadError;
use crate::model::Package;

pub use json::JsonModelLoader;

/// A front-end that produces interface models.
pub trait ModelLoader {
    /// Load every interface described by the file at `path`.
    fn load_file(&self, path: &Path) -> Result<Package, LoadError>;

    /// Load the named interfaces of the namespace `import_path`, in the order
    /// given. Fails if any name is unknown.
    fn load_namespace(&self, import_path: &str, names: &[String]) -> Result<Package, LoadError>;
}

/// Keep only the `names` interfaces of `pkg`, in the requested order.
pub(crate) fn select_interfaces(
    mut pkg: Package,
    namespace: &str,
    names: &[String],
) -> Result<Package, LoadError> {
    let missing: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| pkg.interface(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingInterfaces {
            namespace: namespace.to_string(),
            missing: missing.join(", "),
        });
    }

    let mut all = std::mem::take(&mut pkg.interfaces);
    for name in names {
        if let Some(idx) = all.iter().position(|iface| &iface.name == name) {
            pkg.interfaces.push(all.swap_remove(idx));
        }
    }
    Ok(pkg)
}

/// Split a comma-separated interface list, dropping blanks.
pub fn parse_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Interface;

    fn package() -> Package {
        let mut pkg = Package::new("shop");
        for name in ["Cart", "Checkout", "Inventory"] {
            pkg.interfaces.push(Interface::new(name, vec![]));
        }
        pkg
    }

    fn names(list: &str) -> Vec<String> {
        parse_names(list)
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(names("A, B,,C "), vec!["A", "B", "C"]);
        assert!(names("").is_empty());
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let pkg = select_interfaces(package(), "example.com/shop", &names("Inventory,Cart")).unwrap();
        let selected: Vec<_> = pkg.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(selected, vec!["Inventory", "Cart"]);
    }

    #[test]
    fn test_select_reports_every_missing_name() {
        let err = select_interfaces(package(), "example.com/shop", &names("Cart,Basket,Till"))
            .unwrap_err();
        match err {
            LoadError::MissingInterfaces { namespace, missing } => {
                assert_eq!(namespace, "example.com/shop");
                assert_eq!(missing, "Basket, Till");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
