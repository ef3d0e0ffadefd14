// src/model/mod.rs
//! The interface model consumed by the generator.
//!
//! A front-end builds one [`Package`] per generation run. The generator only
//! ever borrows it, so the model is frozen for the duration of the run.

mod print;
mod types;

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

pub use types::{ChanDir, PackageAliases, Type, TypeRenderError};

/// A namespace containing the interfaces to mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    /// Import paths the front-end reports for the namespace. They reserve an
    /// alias but are only imported when a signature references them (see
    /// [`Package::referenced_imports`]).
    #[serde(default)]
    pub imports: BTreeSet<String>,
    /// Paths imported with `.`; emitted verbatim.
    #[serde(default)]
    pub dot_imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Embedded interfaces the front-end could not flatten.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// Trailing variadic parameter; its type is the element type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variadic: Option<Parameter>,
    #[serde(default)]
    pub results: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// A violated model invariant, reported by [`Package::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelViolation {
    DuplicateInterface { interface: String },
    DuplicateMethod { interface: String, method: String },
    DuplicateParameter {
        interface: String,
        method: String,
        parameter: String,
    },
}

impl std::fmt::Display for ModelViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelViolation::DuplicateInterface { interface } => {
                write!(f, "interface '{}' is declared more than once", interface)
            }
            ModelViolation::DuplicateMethod { interface, method } => {
                write!(
                    f,
                    "method '{}' is declared more than once in interface '{}'",
                    method, interface
                )
            }
            ModelViolation::DuplicateParameter {
                interface,
                method,
                parameter,
            } => write!(
                f,
                "parameter '{}' is declared more than once in {}.{}",
                parameter, interface, method
            ),
        }
    }
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interfaces: Vec::new(),
            imports: BTreeSet::new(),
            dot_imports: Vec::new(),
        }
    }

    /// Every import path that needs an alias: explicit imports plus the
    /// package of every named type in any signature.
    pub fn required_imports(&self) -> BTreeSet<String> {
        let mut paths = self.imports.clone();
        paths.extend(self.referenced_imports());
        paths
    }

    /// Packages of the named types in the signatures of the interfaces
    /// present. These are the only paths the generated code uses.
    pub fn referenced_imports(&self) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        for iface in &self.interfaces {
            for method in &iface.methods {
                method.collect_imports(&mut paths);
            }
        }
        paths
    }

    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|iface| iface.name == name)
    }

    /// Check the naming invariants front-ends are expected to uphold.
    ///
    /// Unnamed parameters are exempt from the uniqueness check since the
    /// generator synthesizes their names from position.
    pub fn validate(&self) -> Result<(), ModelViolation> {
        let mut interfaces = FxHashSet::default();
        for iface in &self.interfaces {
            if !interfaces.insert(iface.name.as_str()) {
                return Err(ModelViolation::DuplicateInterface {
                    interface: iface.name.clone(),
                });
            }
            let mut methods = FxHashSet::default();
            for method in &iface.methods {
                if !methods.insert(method.name.as_str()) {
                    return Err(ModelViolation::DuplicateMethod {
                        interface: iface.name.clone(),
                        method: method.name.clone(),
                    });
                }
                let mut params = FxHashSet::default();
                for param in method.all_params() {
                    if param.name.is_empty() || param.name == "_" {
                        continue;
                    }
                    if !params.insert(param.name.as_str()) {
                        return Err(ModelViolation::DuplicateParameter {
                            interface: iface.name.clone(),
                            method: method.name.clone(),
                            parameter: param.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Interface {
    pub fn new(name: impl Into<String>, methods: Vec<Method>) -> Self {
        Self {
            name: name.into(),
            methods,
            embedded: Vec::new(),
        }
    }
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            variadic: None,
            results: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.params.push(Parameter::new(name, ty));
        self
    }

    pub fn variadic(mut self, name: impl Into<String>, elem: Type) -> Self {
        self.variadic = Some(Parameter::new(name, elem));
        self
    }

    pub fn returns(mut self, ty: Type) -> Self {
        self.results.push(ty);
        self
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    /// Fixed parameters followed by the variadic one, if any.
    pub fn all_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().chain(self.variadic.iter())
    }

    fn collect_imports(&self, out: &mut BTreeSet<String>) {
        for param in self.all_params() {
            param.ty.collect_imports(out);
        }
        for ty in &self.results {
            ty.collect_imports(out);
        }
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
