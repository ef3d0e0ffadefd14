// src/fmt/config.rs
//! Configuration for the Go printer.
//!
//! Generated code follows gofmt, so there is only one style. This struct
//! keeps the layout constants in one place.

/// Printer configuration. All values are fixed for canonical style.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Width of one nesting level while laying out the document
    pub indent_width: u8,
    /// Maximum line width (soft limit for breaking decisions)
    pub max_line_width: u16,
    /// Replace each leading indentation level with a tab after rendering
    pub use_tabs: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        CANONICAL
    }
}

/// gofmt layout: tab indentation, no soft wrapping of generated lines.
pub const CANONICAL: FormatConfig = FormatConfig {
    indent_width: 4,
    max_line_width: 120,
    use_tabs: true,
};

impl FormatConfig {
    /// Get the indentation string for a given level.
    pub fn indent(&self, level: u32) -> String {
        if self.use_tabs {
            "\t".repeat(level as usize)
        } else {
            " ".repeat(self.indent_width as usize * level as usize)
        }
    }

    /// Rewrite the leading space indentation of a rendered line.
    pub(crate) fn reindent(&self, line: &str) -> String {
        let width = self.indent_width as usize;
        if !self.use_tabs || width == 0 {
            return line.to_string();
        }
        let spaces = line.len() - line.trim_start_matches(' ').len();
        let level = spaces / width;
        format!("{}{}", self.indent(level as u32), &line[level * width..])
    }
}
