// src/identity/alias.rs
//
// Import path -> local package alias allocation.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use super::reserved::is_reserved;
use crate::model::PackageAliases;

/// Identifier used when a path segment sanitizes to nothing usable.
pub const FALLBACK_IDENT: &str = "x";

/// An injective mapping from import path to local alias.
///
/// Aliases are handed out in call order, so callers that need reproducible
/// output must allocate in a deterministic order.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    by_path: BTreeMap<String, String>,
    allocated: FxHashSet<String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate aliases for `paths` in iteration order.
    pub fn resolve<'p>(paths: impl IntoIterator<Item = &'p str>) -> Self {
        let mut table = Self::new();
        for path in paths {
            table.allocate(path);
        }
        table
    }

    /// Allocate an alias for `path`, or return the one it already has.
    ///
    /// The candidate is the sanitized final path segment. On a clash with an
    /// allocated alias or a reserved word, `0`, `1`, ... is appended to the
    /// base until the name is free.
    pub fn allocate(&mut self, path: &str) -> &str {
        if !self.by_path.contains_key(path) {
            let base = sanitize(base_name(path));
            let mut alias = base.clone();
            let mut suffix = 0u32;
            while self.allocated.contains(&alias) || is_reserved(&alias) {
                alias = format!("{}{}", base, suffix);
                suffix += 1;
            }
            tracing::trace!(path, alias = %alias, "allocated import alias");
            self.allocated.insert(alias.clone());
            self.by_path.insert(path.to_string(), alias);
        }
        &self.by_path[path]
    }

    pub fn alias_of(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    /// Whether `name` is taken by some alias.
    pub fn is_allocated(&self, name: &str) -> bool {
        self.allocated.contains(name)
    }

    /// (path, alias) pairs ordered by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_path
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

impl PackageAliases for AliasTable {
    fn alias_of(&self, path: &str) -> Option<&str> {
        AliasTable::alias_of(self, path)
    }
}

/// Final segment of an import path, ignoring trailing slashes.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Turn an arbitrary string into a Go identifier.
///
/// The first character must be an ASCII letter or `_`, the rest ASCII letters,
/// digits or `_`; anything else, non-ASCII included, becomes `_`. A result
/// with no letter or digit left (including the empty string) becomes
/// [`FALLBACK_IDENT`].
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let valid = if out.is_empty() {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || c == '_'
        };
        out.push(if valid { c } else { '_' });
    }
    if out.chars().all(|c| c == '_') {
        return FALLBACK_IDENT.to_string();
    }
    out
}
