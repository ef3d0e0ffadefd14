// src/identity/reserved.rs
//
// Go words a generated identifier must never take.

/// Go keywords.
const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Predeclared identifiers. Legal to shadow, but an alias or parameter with
/// one of these names breaks any signature that mentions the builtin.
const PREDECLARED: &[&str] = &[
    "any",
    "append",
    "bool",
    "byte",
    "cap",
    "clear",
    "close",
    "comparable",
    "complex",
    "complex128",
    "complex64",
    "copy",
    "delete",
    "error",
    "false",
    "float32",
    "float64",
    "imag",
    "int",
    "int16",
    "int32",
    "int64",
    "int8",
    "iota",
    "len",
    "make",
    "max",
    "min",
    "new",
    "nil",
    "panic",
    "print",
    "println",
    "real",
    "recover",
    "rune",
    "string",
    "true",
    "uint",
    "uint16",
    "uint32",
    "uint64",
    "uint8",
    "uintptr",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Keywords plus predeclared identifiers.
pub fn is_reserved(name: &str) -> bool {
    is_keyword(name) || PREDECLARED.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_reserved() {
        for word in ["case", "func", "type", "range", "map"] {
            assert!(is_keyword(word), "{word} should be a keyword");
            assert!(is_reserved(word));
        }
    }

    #[test]
    fn predeclared_names_are_reserved_but_not_keywords() {
        for word in ["string", "error", "len", "nil"] {
            assert!(!is_keyword(word));
            assert!(is_reserved(word), "{word} should be reserved");
        }
    }

    #[test]
    fn ordinary_names_are_free() {
        assert!(!is_reserved("template"));
        assert!(!is_reserved("Case"));
        assert!(!is_reserved("strings"));
    }
}
