// src/model/types.rs
//! Type references and their rendering to Go source text.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Parameter;

/// Channel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    #[default]
    Both,
    Recv,
    Send,
}

/// A type as it appears in a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// A predeclared type such as `int`, `error` or `interface{}`.
    Predeclared { name: String },
    /// A type declared in a package. An empty `package` means the type is
    /// always rendered unqualified.
    Named {
        #[serde(default)]
        package: String,
        name: String,
    },
    Pointer { elem: Box<Type> },
    Slice { elem: Box<Type> },
    Array { len: u64, elem: Box<Type> },
    Map { key: Box<Type>, value: Box<Type> },
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<Type>,
    },
    Func {
        #[serde(default)]
        params: Vec<Parameter>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variadic: Option<Box<Parameter>>,
        #[serde(default)]
        results: Vec<Type>,
    },
}

/// Maps an import path to the local name code should use for it.
pub trait PackageAliases {
    fn alias_of(&self, path: &str) -> Option<&str>;
}

impl PackageAliases for std::collections::BTreeMap<String, String> {
    fn alias_of(&self, path: &str) -> Option<&str> {
        self.get(path).map(String::as_str)
    }
}

/// A named type referenced a package that has no alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRenderError {
    pub package: String,
    pub name: String,
}

impl fmt::Display for TypeRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no import alias for package '{}' (needed by type '{}')",
            self.package, self.name
        )
    }
}

impl std::error::Error for TypeRenderError {}

impl Type {
    pub fn predeclared(name: impl Into<String>) -> Self {
        Type::Predeclared { name: name.into() }
    }

    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        Type::Named {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: Type) -> Self {
        Type::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    /// Render the type as Go source.
    ///
    /// Named types from `override_package` are rendered unqualified; all
    /// other named types are qualified with their alias.
    pub fn render(
        &self,
        aliases: &dyn PackageAliases,
        override_package: Option<&str>,
    ) -> Result<String, TypeRenderError> {
        self.render_with(&mut |package, name| {
            if package.is_empty() || Some(package) == override_package {
                return Ok(name.to_string());
            }
            match aliases.alias_of(package) {
                Some(alias) => Ok(format!("{}.{}", alias, name)),
                None => Err(TypeRenderError {
                    package: package.to_string(),
                    name: name.to_string(),
                }),
            }
        })
    }

    fn render_with(
        &self,
        qualify: &mut dyn FnMut(&str, &str) -> Result<String, TypeRenderError>,
    ) -> Result<String, TypeRenderError> {
        Ok(match self {
            Type::Predeclared { name } => name.clone(),
            Type::Named { package, name } => qualify(package, name)?,
            Type::Pointer { elem } => format!("*{}", elem.render_with(qualify)?),
            Type::Slice { elem } => format!("[]{}", elem.render_with(qualify)?),
            Type::Array { len, elem } => format!("[{}]{}", len, elem.render_with(qualify)?),
            Type::Map { key, value } => format!(
                "map[{}]{}",
                key.render_with(qualify)?,
                value.render_with(qualify)?
            ),
            Type::Chan { dir, elem } => {
                let elem = elem.render_with(qualify)?;
                match dir {
                    ChanDir::Both => format!("chan {}", elem),
                    ChanDir::Recv => format!("<-chan {}", elem),
                    ChanDir::Send => format!("chan<- {}", elem),
                }
            }
            Type::Func {
                params,
                variadic,
                results,
            } => {
                let mut args = params
                    .iter()
                    .map(|p| p.ty.render_with(qualify))
                    .collect::<Result<Vec<_>, _>>()?;
                if let Some(variadic) = variadic {
                    args.push(format!("...{}", variadic.ty.render_with(qualify)?));
                }
                let rets = results
                    .iter()
                    .map(|r| r.render_with(qualify))
                    .collect::<Result<Vec<_>, _>>()?;
                let ret = match rets.len() {
                    0 => String::new(),
                    1 => format!(" {}", rets[0]),
                    _ => format!(" ({})", rets.join(", ")),
                };
                format!("func({}){}", args.join(", "), ret)
            }
        })
    }

    /// Add the package of every named type reachable from this type.
    pub fn collect_imports(&self, out: &mut BTreeSet<String>) {
        self.visit_named(&mut |package, _| {
            if !package.is_empty() {
                out.insert(package.to_string());
            }
        });
    }

    /// Add the name of every named type that renders without a package
    /// qualifier, i.e. those with no package or from `override_package`.
    pub fn collect_unqualified_names(&self, override_package: Option<&str>, out: &mut BTreeSet<String>) {
        self.visit_named(&mut |package, name| {
            if package.is_empty() || Some(package) == override_package {
                out.insert(name.to_string());
            }
        });
    }

    fn visit_named(&self, f: &mut dyn FnMut(&str, &str)) {
        match self {
            Type::Predeclared { .. } => {}
            Type::Named { package, name } => f(package, name),
            Type::Pointer { elem }
            | Type::Slice { elem }
            | Type::Array { elem, .. }
            | Type::Chan { elem, .. } => elem.visit_named(f),
            Type::Map { key, value } => {
                key.visit_named(f);
                value.visit_named(f);
            }
            Type::Func {
                params,
                variadic,
                results,
            } => {
                for p in params.iter().chain(variadic.as_deref()) {
                    p.ty.visit_named(f);
                }
                for r in results {
                    r.visit_named(f);
                }
            }
        }
    }
}

/// Fully qualified form, e.g. `map[string]*example.com/store.Item`.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .render_with(&mut |package, name| {
                Ok(if package.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", package, name)
                })
            })
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
