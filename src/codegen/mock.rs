// src/codegen/mock.rs
//
// Mock type, constructors and recording stubs.

use crate::errors::GenerateError;
use crate::model::{Interface, Method};
use crate::syntax::{
    BinaryOp, Block, Decl, Expr, Field, FuncDecl, Param, Results, Stmt, StructDecl, TypeExpr,
};

use super::context::{Context, mock_name};
use super::signature::Signature;

/// Emit the mock struct, its constructors and one stub per method.
pub(crate) fn emit_mock(
    ctx: &Context<'_>,
    iface: &Interface,
    decls: &mut Vec<Decl>,
) -> Result<(), GenerateError> {
    let mock = mock_name(iface);
    let mock_ptr = TypeExpr::named(&mock).pointer();
    let with_handler = format!("New{}WithFailHandler", mock);

    decls.push(Decl::Struct(StructDecl {
        doc: vec![format!("Mock of {} interface", iface.name)],
        name: mock.clone(),
        fields: vec![Field::new("fail", ctx.recorder_type("FailHandler"))],
    }));

    decls.push(Decl::Func(FuncDecl {
        doc: vec![],
        receiver: None,
        name: format!("New{}", mock),
        params: vec![],
        results: Results::Unnamed(vec![mock_ptr.clone()]),
        body: Block::new(vec![Stmt::ret(vec![
            Expr::ident(&with_handler).call(vec![ctx.recorder_item(ctx.fail_handler_default)]),
        ])]),
    }));

    decls.push(Decl::Func(FuncDecl {
        doc: vec![],
        receiver: None,
        name: with_handler,
        params: vec![Param {
            name: "fail".to_string(),
            ty: ctx.recorder_type("FailHandler"),
            variadic: false,
        }],
        results: Results::Unnamed(vec![mock_ptr.clone()]),
        body: Block::new(vec![Stmt::ret(vec![
            Expr::Composite {
                ty: TypeExpr::named(&mock),
                elems: vec![Expr::key_value("fail", Expr::ident("fail"))],
            }
            .address_of(),
        ])]),
    }));

    for method in &iface.methods {
        let sig = Signature::new(ctx, iface, method)?;
        decls.push(Decl::Func(recording_stub(ctx, method, &sig, mock_ptr.clone())));
    }
    Ok(())
}

/// A stub that forwards the call to the recorder and narrows the returned
/// values to the declared result types.
fn recording_stub(ctx: &Context<'_>, method: &Method, sig: &Signature, mock_ptr: TypeExpr) -> FuncDecl {
    let mut body = sig.pack_params(ctx);

    let output_types = sig
        .results
        .iter()
        .map(|ty| ctx.reflect_type_of(ty))
        .collect();
    let invoke = ctx.generic_mock(Expr::ident("mock")).method(
        "Invoke",
        vec![
            Expr::str(&method.name),
            Expr::ident("params"),
            Expr::Bool(sig.is_variadic()),
            Expr::Composite {
                ty: ctx.reflect_type().slice(),
                elems: output_types,
            },
        ],
    );

    if sig.results.is_empty() {
        body.push(Stmt::Expr(invoke));
    } else {
        body.push(Stmt::define(&["result"], invoke));
        for (i, ty) in sig.results.iter().enumerate() {
            body.push(Stmt::var(format!("ret{}", i), TypeExpr::named(ty)));
        }
        // A nil or mismatched slot leaves the zero value in place.
        let narrow = sig
            .results
            .iter()
            .enumerate()
            .map(|(i, ty)| {
                Stmt::if_init(
                    Stmt::define(
                        &["r", "ok"],
                        Expr::ident("result")
                            .index(Expr::Int(i as i64))
                            .assert_to(TypeExpr::named(ty)),
                    ),
                    Expr::ident("ok"),
                    vec![Stmt::assign(Expr::ident(format!("ret{}", i)), Expr::ident("r"))],
                )
            })
            .collect();
        body.push(Stmt::if_then(
            Expr::len_of(Expr::ident("result")).binary(BinaryOp::Ne, Expr::Int(0)),
            narrow,
        ));
        body.push(Stmt::ret(
            (0..sig.results.len())
                .map(|i| Expr::ident(format!("ret{}", i)))
                .collect(),
        ));
    }

    FuncDecl {
        doc: vec![],
        receiver: Some(Field::new("mock", mock_ptr)),
        name: method.name.clone(),
        params: sig.go_params(),
        results: sig.go_results(),
        body: Block::new(body),
    }
}
