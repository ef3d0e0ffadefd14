//! Syntax tree to pretty::Doc conversion for generated Go files.

mod decl;
mod expr;

use pretty::{Arena, DocAllocator, DocBuilder};

use super::FormatConfig;
use crate::syntax::{Decl, Import, SourceFile};

use decl::{print_func_decl, print_struct_decl};
use expr::print_string_literal;

/// Indent width used while building documents; converted to tabs on render.
pub(super) const INDENT: isize = 4;

/// Render a file to text in canonical layout.
pub fn render(file: &SourceFile, config: FormatConfig) -> Result<String, std::fmt::Error> {
    let arena = Arena::new();
    let doc = print_file(&arena, file);
    let mut output = String::new();
    doc.render_fmt(config.max_line_width as usize, &mut output)?;

    // Blank lines inside nested blocks carry the nest indentation; drop it and
    // switch the remaining indentation to tabs.
    let mut text = output
        .lines()
        .map(|line| config.reindent(line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    Ok(text)
}

/// Pretty-print a file to a Doc.
pub fn print_file<'a>(arena: &'a Arena<'a>, file: &SourceFile) -> DocBuilder<'a, Arena<'a>> {
    let mut doc = arena.nil();

    if !file.header.is_empty() {
        let comments = file
            .header
            .iter()
            .map(|line| print_comment(arena, line));
        doc = doc
            .append(arena.intersperse(comments, arena.hardline()))
            .append(arena.hardline())
            .append(arena.hardline());
    }

    doc = doc.append(arena.text(format!("package {}", file.package)));

    if !file.imports.is_empty() {
        doc = doc
            .append(arena.hardline())
            .append(arena.hardline())
            .append(print_imports(arena, &file.imports));
    }

    for decl in &file.decls {
        doc = doc
            .append(arena.hardline())
            .append(arena.hardline())
            .append(print_decl(arena, decl));
    }

    doc
}

/// Print a `//` comment line. Embedded newlines would end the comment early.
pub(super) fn print_comment<'a>(arena: &'a Arena<'a>, text: &str) -> DocBuilder<'a, Arena<'a>> {
    let text = text.replace(['\n', '\r'], " ");
    if text.is_empty() {
        arena.text("//")
    } else {
        arena.text(format!("// {}", text))
    }
}

/// Print doc comments, each followed by a line break.
pub(super) fn print_doc<'a>(arena: &'a Arena<'a>, doc: &[String]) -> DocBuilder<'a, Arena<'a>> {
    arena.concat(
        doc.iter()
            .map(|line| print_comment(arena, line).append(arena.hardline())),
    )
}

/// Print the parenthesized import block.
fn print_imports<'a>(arena: &'a Arena<'a>, imports: &[Import]) -> DocBuilder<'a, Arena<'a>> {
    let specs = imports.iter().map(|import| {
        let name = match &import.name {
            Some(name) => arena.text(format!("{} ", name)),
            None => arena.nil(),
        };
        name.append(print_string_literal(arena, &import.path))
    });

    arena
        .text("import (")
        .append(
            arena
                .hardline()
                .append(arena.intersperse(specs, arena.hardline()))
                .nest(INDENT),
        )
        .append(arena.hardline())
        .append(arena.text(")"))
}

fn print_decl<'a>(arena: &'a Arena<'a>, decl: &Decl) -> DocBuilder<'a, Arena<'a>> {
    match decl {
        Decl::Struct(decl) => print_struct_decl(arena, decl),
        Decl::Func(decl) => print_func_decl(arena, decl),
    }
}
