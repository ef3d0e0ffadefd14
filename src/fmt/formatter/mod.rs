//! Formatting collaborators for generated source.
//!
//! A [`SourceFormatter`] takes the printed text and either returns the
//! canonical form or a syntax diagnostic. [`Canonical`] is built in;
//! [`Gofmt`] delegates to an external `gofmt` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Error type for formatting operations.
#[derive(Debug, Clone)]
pub enum FormatError {
    /// Source failed to parse
    Syntax(String),
    /// The formatting tool could not be run
    Tool(String),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::Syntax(msg) => write!(f, "syntax error: {}", msg),
            FormatError::Tool(msg) => write!(f, "formatter unavailable: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result of formatting source code.
#[derive(Debug)]
pub struct FormatResult {
    /// The formatted output
    pub output: String,
    /// Whether the output differs from the input
    pub changed: bool,
}

impl FormatResult {
    fn new(source: &str, output: String) -> Self {
        let changed = output != source;
        Self { output, changed }
    }
}

pub trait SourceFormatter {
    fn format(&self, source: &str) -> Result<FormatResult, FormatError>;
}

/// Built-in formatter.
///
/// Checks that brackets, string, rune and raw literals are balanced, then
/// normalizes whitespace: no trailing spaces, no leading or repeated blank
/// lines, exactly one final newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct Canonical;

impl SourceFormatter for Canonical {
    fn format(&self, source: &str) -> Result<FormatResult, FormatError> {
        check_balanced(source).map_err(FormatError::Syntax)?;

        let mut output = String::with_capacity(source.len());
        let mut blank_run = false;
        for line in source.lines().map(str::trim_end) {
            if line.is_empty() {
                blank_run = !output.is_empty();
                continue;
            }
            if blank_run {
                output.push('\n');
                blank_run = false;
            }
            output.push_str(line);
            output.push('\n');
        }

        Ok(FormatResult::new(source, output))
    }
}

/// Pipes source through an external `gofmt`.
#[derive(Debug, Clone)]
pub struct Gofmt {
    pub program: PathBuf,
}

impl Default for Gofmt {
    fn default() -> Self {
        Self {
            program: PathBuf::from("gofmt"),
        }
    }
}

impl SourceFormatter for Gofmt {
    fn format(&self, source: &str) -> Result<FormatResult, FormatError> {
        let tool_error =
            |e: std::io::Error| FormatError::Tool(format!("{}: {}", self.program.display(), e));

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(tool_error)?;

        // gofmt reads all of stdin before writing, so writing first is safe.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes()).map_err(tool_error)?;
        }
        let output = child.wait_with_output().map_err(tool_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(FormatError::Syntax(stderr));
        }
        let formatted = String::from_utf8(output.stdout)
            .map_err(|e| FormatError::Tool(format!("gofmt produced invalid UTF-8: {}", e)))?;
        Ok(FormatResult::new(source, formatted))
    }
}

/// Scan Go source for unbalanced delimiters and unterminated literals.
fn check_balanced(source: &str) -> Result<(), String> {
    let mut stack: Vec<(char, usize, usize)> = Vec::new();
    let mut chars = source.chars().peekable();
    let (mut line, mut col) = (1usize, 0usize);

    while let Some(c) = chars.next() {
        col += 1;
        match c {
            '\n' => {
                line += 1;
                col = 0;
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        col = 0;
                        break;
                    }
                }
            }
            '"' | '\'' => {
                let quote = c;
                let (start_line, start_col) = (line, col);
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    col += 1;
                    match ch {
                        '\\' => {
                            chars.next();
                            col += 1;
                        }
                        '\n' => break,
                        ch if ch == quote => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(format!(
                        "{}:{}: unterminated {} literal",
                        start_line,
                        start_col,
                        if c == '"' { "string" } else { "rune" }
                    ));
                }
            }
            '`' => {
                let (start_line, start_col) = (line, col);
                let mut closed = false;
                for c in chars.by_ref() {
                    col += 1;
                    if c == '\n' {
                        line += 1;
                        col = 0;
                    } else if c == '`' {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(format!(
                        "{}:{}: unterminated raw string literal",
                        start_line, start_col
                    ));
                }
            }
            '(' | '[' | '{' => stack.push((c, line, col)),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some((open, _, _)) if open == expected => {}
                    Some((open, open_line, open_col)) => {
                        return Err(format!(
                            "{}:{}: unexpected '{}', '{}' opened at {}:{} is still open",
                            line, col, c, open, open_line, open_col
                        ));
                    }
                    None => return Err(format!("{}:{}: unexpected '{}'", line, col, c)),
                }
            }
            _ => {}
        }
    }

    match stack.pop() {
        Some((open, open_line, open_col)) => Err(format!(
            "{}:{}: '{}' is never closed",
            open_line, open_col, open
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
