// src/identity.rs
//
// Local names for imported packages and generated identifiers.

mod alias;
mod reserved;

pub use alias::{AliasTable, FALLBACK_IDENT, base_name, sanitize};
pub use reserved::{is_keyword, is_reserved};
