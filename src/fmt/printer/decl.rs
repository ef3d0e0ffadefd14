//! Declaration printing.

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::syntax::{FuncDecl, Param, Results, StructDecl};

use super::expr::{print_block, print_type};
use super::{INDENT, print_doc};

/// Print a struct type declaration. Field types are aligned in one column
/// the way gofmt aligns consecutive fields.
pub(super) fn print_struct_decl<'a>(
    arena: &'a Arena<'a>,
    decl: &StructDecl,
) -> DocBuilder<'a, Arena<'a>> {
    let header = print_doc(arena, &decl.doc)
        .append(arena.text(format!("type {} struct {{", decl.name)));

    if decl.fields.is_empty() {
        return header.append(arena.hardline()).append(arena.text("}"));
    }

    let width = decl
        .fields
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0);

    let fields = decl.fields.iter().map(|field| {
        let pad = width - field.name.chars().count() + 1;
        arena
            .text(format!("{}{}", field.name, " ".repeat(pad)))
            .append(print_type(arena, &field.ty))
    });

    header
        .append(
            arena
                .hardline()
                .append(arena.intersperse(fields, arena.hardline()))
                .nest(INDENT),
        )
        .append(arena.hardline())
        .append(arena.text("}"))
}

/// Print a function or method declaration.
pub(super) fn print_func_decl<'a>(
    arena: &'a Arena<'a>,
    func: &FuncDecl,
) -> DocBuilder<'a, Arena<'a>> {
    let receiver = match &func.receiver {
        Some(recv) => arena
            .text(format!("({} ", recv.name))
            .append(print_type(arena, &recv.ty))
            .append(arena.text(") ")),
        None => arena.nil(),
    };

    print_doc(arena, &func.doc)
        .append(arena.text("func "))
        .append(receiver)
        .append(arena.text(func.name.clone()))
        .append(print_params(arena, &func.params))
        .append(print_results(arena, &func.results))
        .append(arena.text(" "))
        .append(print_block(arena, &func.body))
}

/// Print a parameter list; always single line.
fn print_params<'a>(arena: &'a Arena<'a>, params: &[Param]) -> DocBuilder<'a, Arena<'a>> {
    let docs = params.iter().map(|param| {
        let ellipsis = if param.variadic { "..." } else { "" };
        arena
            .text(format!("{} {}", param.name, ellipsis))
            .append(print_type(arena, &param.ty))
    });

    arena
        .text("(")
        .append(arena.intersperse(docs, arena.text(", ")))
        .append(arena.text(")"))
}

/// Print a result clause: nothing, ` T`, ` (A, B)` or ` (a A, b B)`.
fn print_results<'a>(arena: &'a Arena<'a>, results: &Results) -> DocBuilder<'a, Arena<'a>> {
    match results {
        Results::None => arena.nil(),
        Results::Unnamed(types) if types.is_empty() => arena.nil(),
        Results::Unnamed(types) if types.len() == 1 => {
            arena.text(" ").append(print_type(arena, &types[0]))
        }
        Results::Unnamed(types) => {
            let docs = types.iter().map(|ty| print_type(arena, ty));
            arena
                .text(" (")
                .append(arena.intersperse(docs, arena.text(", ")))
                .append(arena.text(")"))
        }
        Results::Named(fields) if fields.is_empty() => arena.nil(),
        Results::Named(fields) => {
            let docs = fields.iter().map(|field| {
                arena
                    .text(format!("{} ", field.name))
                    .append(print_type(arena, &field.ty))
            });
            arena
                .text(" (")
                .append(arena.intersperse(docs, arena.text(", ")))
                .append(arena.text(")"))
        }
    }
}
