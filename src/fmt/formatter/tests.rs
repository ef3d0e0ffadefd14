use super::*;

/// Helper to format and return just the output string
fn fmt(source: &str) -> String {
    Canonical.format(source).unwrap().output
}

fn syntax_error(source: &str) -> String {
    match Canonical.format(source) {
        Err(FormatError::Syntax(msg)) => msg,
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

// === Accepted input ===

#[test]
fn test_canonical_input_is_unchanged() {
    let source = "package mocks\n\nfunc f() {\n\treturn\n}\n";
    let result = Canonical.format(source).unwrap();
    assert_eq!(result.output, source);
    assert!(!result.changed);
}

#[test]
fn test_adds_trailing_newline() {
    let result = Canonical.format("package mocks").unwrap();
    assert_eq!(result.output, "package mocks\n");
    assert!(result.changed);
}

#[test]
fn test_strips_trailing_whitespace() {
    assert_eq!(fmt("package mocks  \n\t\n"), "package mocks\n");
}

#[test]
fn test_collapses_blank_line_runs() {
    assert_eq!(
        fmt("\n\npackage mocks\n\n\n\ntype A struct {\n}\n\n"),
        "package mocks\n\ntype A struct {\n}\n"
    );
}

#[test]
fn test_brackets_inside_literals_and_comments_are_ignored() {
    let source = "// a ( comment\nvar s = \"}{\\\"\"\nvar r = '('\nvar raw = `\n)`\n";
    assert_eq!(fmt(source), source);
}

// === Diagnostics ===

#[test]
fn test_rejects_unclosed_brace() {
    let msg = syntax_error("func f() {\n\treturn\n");
    assert_eq!(msg, "1:10: '{' is never closed");
}

#[test]
fn test_rejects_stray_closer() {
    let msg = syntax_error("package p\n)\n");
    assert_eq!(msg, "2:1: unexpected ')'");
}

#[test]
fn test_rejects_mismatched_closer() {
    let msg = syntax_error("f(a]");
    assert!(msg.starts_with("1:4: unexpected ']'"), "got {msg}");
}

#[test]
fn test_rejects_unterminated_string() {
    let msg = syntax_error("x := \"abc\ny := 1\n");
    assert_eq!(msg, "1:6: unterminated string literal");
}

#[test]
fn test_rejects_unterminated_raw_string() {
    let msg = syntax_error("x := `abc\n");
    assert_eq!(msg, "1:6: unterminated raw string literal");
}

// === External tool ===

#[test]
fn test_missing_gofmt_is_a_tool_error() {
    let gofmt = Gofmt {
        program: PathBuf::from("/nonexistent/bin/gofmt"),
    };
    let err = gofmt.format("package p\n").unwrap_err();
    assert!(matches!(err, FormatError::Tool(_)), "got {:?}", err);
}
