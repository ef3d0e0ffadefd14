//! Statement, expression and type printing.

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::syntax::{Block, Expr, Stmt, TypeExpr};

use super::INDENT;

/// Print a braced block. An empty block keeps its braces on separate lines,
/// matching how gofmt leaves generated empty bodies.
pub(super) fn print_block<'a>(arena: &'a Arena<'a>, block: &Block) -> DocBuilder<'a, Arena<'a>> {
    if block.is_empty() {
        return arena.text("{").append(arena.hardline()).append(arena.text("}"));
    }

    let stmts = arena.intersperse(
        block.stmts.iter().map(|stmt| print_stmt(arena, stmt)),
        arena.hardline(),
    );

    arena
        .text("{")
        .append(arena.hardline().append(stmts).nest(INDENT))
        .append(arena.hardline())
        .append(arena.text("}"))
}

/// Print a statement.
pub(super) fn print_stmt<'a>(arena: &'a Arena<'a>, stmt: &Stmt) -> DocBuilder<'a, Arena<'a>> {
    match stmt {
        Stmt::Define { names, value } => arena
            .text(format!("{} := ", names.join(", ")))
            .append(print_expr(arena, value)),
        Stmt::Assign { target, value } => print_expr(arena, target)
            .append(arena.text(" = "))
            .append(print_expr(arena, value)),
        Stmt::Var { name, ty } => arena
            .text(format!("var {} ", name))
            .append(print_type(arena, ty)),
        Stmt::Inc(name) => arena.text(format!("{}++", name)),
        Stmt::Expr(expr) => print_expr(arena, expr),
        Stmt::Return(values) if values.is_empty() => arena.text("return"),
        Stmt::Return(values) => arena.text("return ").append(arena.intersperse(
            values.iter().map(|v| print_expr(arena, v)),
            arena.text(", "),
        )),
        Stmt::If { init, cond, then } => {
            let init = match init {
                Some(init) => print_stmt(arena, init).append(arena.text("; ")),
                None => arena.nil(),
            };
            arena
                .text("if ")
                .append(init)
                .append(print_expr(arena, cond))
                .append(arena.text(" "))
                .append(print_block(arena, then))
        }
        Stmt::Range {
            key,
            value,
            over,
            body,
        } => {
            let vars = match value {
                Some(value) => format!("{}, {}", key, value),
                None => key.clone(),
            };
            arena
                .text(format!("for {} := range ", vars))
                .append(print_expr(arena, over))
                .append(arena.text(" "))
                .append(print_block(arena, body))
        }
        Stmt::For {
            init,
            cond,
            post,
            body,
        } => arena
            .text("for ")
            .append(print_stmt(arena, init))
            .append(arena.text("; "))
            .append(print_expr(arena, cond))
            .append(arena.text("; "))
            .append(print_stmt(arena, post))
            .append(arena.text(" "))
            .append(print_block(arena, body)),
    }
}

/// Print an expression.
pub(super) fn print_expr<'a>(arena: &'a Arena<'a>, expr: &Expr) -> DocBuilder<'a, Arena<'a>> {
    print_expr_in(arena, expr, false)
}

/// `compact` drops the spaces around binary operators, as gofmt does inside
/// index expressions and multi-argument calls.
fn print_expr_in<'a>(
    arena: &'a Arena<'a>,
    expr: &Expr,
    compact: bool,
) -> DocBuilder<'a, Arena<'a>> {
    match expr {
        Expr::Ident(name) => arena.text(name.clone()),
        Expr::Str(value) => print_string_literal(arena, value),
        Expr::Int(value) => arena.text(value.to_string()),
        Expr::Bool(value) => arena.text(if *value { "true" } else { "false" }),
        Expr::Selector(base, name) => print_expr(arena, base).append(arena.text(format!(".{}", name))),
        Expr::Call { func, args } => print_expr(arena, func)
            .append(arena.text("("))
            .append(print_expr_list(arena, args, args.len() > 1))
            .append(arena.text(")")),
        Expr::Index(base, index) => print_expr(arena, base)
            .append(arena.text("["))
            .append(print_expr_in(arena, index, true))
            .append(arena.text("]")),
        Expr::TypeAssert(base, ty) => print_expr(arena, base)
            .append(arena.text(".("))
            .append(print_type(arena, ty))
            .append(arena.text(")")),
        Expr::Composite { ty, elems } => print_type(arena, ty)
            .append(arena.text("{"))
            .append(print_expr_list(arena, elems, false))
            .append(arena.text("}")),
        Expr::KeyValue(key, value) => arena
            .text(format!("{}: ", key))
            .append(print_expr(arena, value)),
        Expr::AddressOf(inner) => arena.text("&").append(print_expr(arena, inner)),
        Expr::Binary { op, lhs, rhs } => {
            let op = if compact {
                op.as_str().to_string()
            } else {
                format!(" {} ", op.as_str())
            };
            print_expr_in(arena, lhs, compact)
                .append(arena.text(op))
                .append(print_expr_in(arena, rhs, compact))
        }
        Expr::Type(ty) => print_type(arena, ty),
        Expr::Paren(inner) => arena
            .text("(")
            .append(print_expr(arena, inner))
            .append(arena.text(")")),
    }
}

fn print_expr_list<'a>(
    arena: &'a Arena<'a>,
    exprs: &[Expr],
    compact: bool,
) -> DocBuilder<'a, Arena<'a>> {
    arena.intersperse(
        exprs.iter().map(|e| print_expr_in(arena, e, compact)),
        arena.text(", "),
    )
}

/// Print a type expression.
pub(super) fn print_type<'a>(arena: &'a Arena<'a>, ty: &TypeExpr) -> DocBuilder<'a, Arena<'a>> {
    match ty {
        TypeExpr::Named(text) => arena.text(text.clone()),
        TypeExpr::Pointer(elem) => arena.text("*").append(print_type(arena, elem)),
        TypeExpr::Slice(elem) => arena.text("[]").append(print_type(arena, elem)),
    }
}

/// Print a Go interpreted string literal.
pub(super) fn print_string_literal<'a>(
    arena: &'a Arena<'a>,
    value: &str,
) -> DocBuilder<'a, Arena<'a>> {
    arena.text(quote(value))
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::BinaryOp;

    fn render_stmt(stmt: &Stmt) -> String {
        let arena = Arena::new();
        let mut out = String::new();
        print_stmt(&arena, stmt).render_fmt(120, &mut out).unwrap();
        out
    }

    fn render_expr(expr: &Expr) -> String {
        let arena = Arena::new();
        let mut out = String::new();
        print_expr(&arena, expr).render_fmt(120, &mut out).unwrap();
        out
    }

    #[test]
    fn quote_escapes_go_specials() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote("line\nnext\u{1}"), "\"line\\nnext\\x01\"");
    }

    #[test]
    fn reflect_type_expression() {
        let expr = Expr::ident("reflect")
            .method(
                "TypeOf",
                vec![
                    Expr::Type(TypeExpr::named("string").pointer())
                        .paren()
                        .call(vec![Expr::nil()]),
                ],
            )
            .method("Elem", vec![]);
        assert_eq!(render_expr(&expr), "reflect.TypeOf((*string)(nil)).Elem()");
    }

    #[test]
    fn composite_literals() {
        let expr = Expr::Composite {
            ty: TypeExpr::named("pegomock.Param").slice(),
            elems: vec![Expr::ident("a"), Expr::ident("b")],
        };
        assert_eq!(render_expr(&expr), "[]pegomock.Param{a, b}");

        let keyed = Expr::Composite {
            ty: TypeExpr::named("MockGreeter"),
            elems: vec![Expr::key_value("fail", Expr::ident("fail"))],
        }
        .address_of();
        assert_eq!(render_expr(&keyed), "&MockGreeter{fail: fail}");
    }

    #[test]
    fn if_with_init_statement() {
        let stmt = Stmt::if_init(
            Stmt::define(
                &["r", "ok"],
                Expr::ident("result")
                    .index(Expr::Int(0))
                    .assert_to(TypeExpr::named("string")),
            ),
            Expr::ident("ok"),
            vec![Stmt::assign(Expr::ident("ret0"), Expr::ident("r"))],
        );
        assert_eq!(
            render_stmt(&stmt),
            "if r, ok := result[0].(string); ok {\n    ret0 = r\n}"
        );
    }

    #[test]
    fn loops() {
        let range = Stmt::range(
            "_",
            Some("param"),
            Expr::ident("args"),
            vec![Stmt::assign(
                Expr::ident("params"),
                Expr::ident("append").call(vec![Expr::ident("params"), Expr::ident("param")]),
            )],
        );
        assert_eq!(
            render_stmt(&range),
            "for _, param := range args {\n    params = append(params, param)\n}"
        );

        let counted = Stmt::For {
            init: Box::new(Stmt::define(&["x"], Expr::Int(1))),
            cond: Expr::ident("x").binary(BinaryOp::Lt, Expr::len_of(Expr::ident("params"))),
            post: Box::new(Stmt::Inc("x".to_string())),
            body: Block::default(),
        };
        assert_eq!(
            render_stmt(&counted),
            "for x := 1; x < len(params); x++ {\n}"
        );
    }

    #[test]
    fn binary_spacing_follows_context() {
        let last = Expr::len_of(Expr::ident("names")).binary(BinaryOp::Sub, Expr::Int(1));
        assert_eq!(render_expr(&last), "len(names) - 1");
        assert_eq!(
            render_expr(&Expr::ident("names").index(last.clone())),
            "names[len(names)-1]"
        );
        assert_eq!(
            render_expr(&Expr::ident("make").call(vec![
                Expr::Type(TypeExpr::named("string").slice()),
                Expr::Int(0),
                last,
            ])),
            "make([]string, 0, len(names)-1)"
        );
    }

    #[test]
    fn returns() {
        assert_eq!(render_stmt(&Stmt::ret(vec![])), "return");
        assert_eq!(
            render_stmt(&Stmt::ret(vec![Expr::ident("ret0"), Expr::ident("ret1")])),
            "return ret0, ret1"
        );
    }
}
