// src/codegen/verifier.rs
//
// Fluent verification API: the verifier type, its constructors on the mock,
// and one captured-argument accessor type per method.

use crate::errors::GenerateError;
use crate::model::{Interface, Method};
use crate::syntax::{
    BinaryOp, Block, Decl, Expr, Field, FuncDecl, Param, Results, Stmt, StructDecl, TypeExpr,
};

use super::context::{Context, mock_name, ongoing_verification_name, verifier_name};
use super::signature::{Signature, positional_name};

pub(crate) fn emit_verifier(
    ctx: &Context<'_>,
    iface: &Interface,
    decls: &mut Vec<Decl>,
) -> Result<(), GenerateError> {
    let mock_ptr = TypeExpr::named(mock_name(iface)).pointer();
    let verifier = verifier_name(iface);
    let verifier_ptr = TypeExpr::named(&verifier).pointer();

    decls.push(Decl::Struct(StructDecl {
        doc: vec![],
        name: verifier.clone(),
        fields: vec![
            Field::new("mock", mock_ptr.clone()),
            Field::new("invocationCountMatcher", ctx.recorder_type("Matcher")),
            Field::new("inOrderContext", ctx.recorder_type("InOrderContext").pointer()),
        ],
    }));

    let constructor = |name: &str, params: Vec<Param>, matcher: Expr, in_order: Expr| {
        Decl::Func(FuncDecl {
            doc: vec![],
            receiver: Some(Field::new("mock", mock_ptr.clone())),
            name: name.to_string(),
            params,
            results: Results::Unnamed(vec![verifier_ptr.clone()]),
            body: Block::new(vec![Stmt::ret(vec![
                Expr::Composite {
                    ty: TypeExpr::named(&verifier),
                    elems: vec![
                        Expr::key_value("mock", Expr::ident("mock")),
                        Expr::key_value("invocationCountMatcher", matcher),
                        Expr::key_value("inOrderContext", in_order),
                    ],
                }
                .address_of(),
            ])]),
        })
    };
    let matcher_param = Param {
        name: "invocationCountMatcher".to_string(),
        ty: ctx.recorder_type("Matcher"),
        variadic: false,
    };
    let context_param = Param {
        name: "inOrderContext".to_string(),
        ty: ctx.recorder_type("InOrderContext").pointer(),
        variadic: false,
    };

    decls.push(constructor(
        "VerifyWasCalledOnce",
        vec![],
        ctx.recorder_item("Times").call(vec![Expr::Int(1)]),
        Expr::nil(),
    ));
    decls.push(constructor(
        "VerifyWasCalled",
        vec![matcher_param.clone()],
        Expr::ident("invocationCountMatcher"),
        Expr::nil(),
    ));
    decls.push(constructor(
        "VerifyWasCalledInOrder",
        vec![matcher_param, context_param],
        Expr::ident("invocationCountMatcher"),
        Expr::ident("inOrderContext"),
    ));

    for method in &iface.methods {
        let sig = Signature::new(ctx, iface, method)?;
        let ongoing = ongoing_verification_name(iface, method);

        decls.push(Decl::Func(verify_method(ctx, method, &sig, &verifier_ptr, &ongoing)));
        decls.push(Decl::Struct(StructDecl {
            doc: vec![],
            name: ongoing.clone(),
            fields: vec![Field::new("mock", mock_ptr.clone())],
        }));

        let accessor = Field::new("c", TypeExpr::named(&ongoing).pointer());
        decls.push(Decl::Func(captured_arguments(&sig, accessor.clone())));
        decls.push(Decl::Func(all_captured_arguments(ctx, method, &sig, accessor)));
    }
    Ok(())
}

/// The fluent verification method: pack the matcher arguments, verify, and
/// hand back an accessor for the captured arguments.
fn verify_method(
    ctx: &Context<'_>,
    method: &Method,
    sig: &Signature,
    verifier_ptr: &TypeExpr,
    ongoing: &str,
) -> FuncDecl {
    let mut body = sig.pack_params(ctx);
    body.push(Stmt::Expr(
        ctx.generic_mock(Expr::ident("verifier").field("mock")).method(
            "Verify",
            vec![
                Expr::ident("verifier").field("inOrderContext"),
                Expr::ident("verifier").field("invocationCountMatcher"),
                Expr::str(&method.name),
                Expr::ident("params"),
                Expr::Bool(sig.is_variadic()),
            ],
        ),
    ));
    body.push(Stmt::ret(vec![
        Expr::Composite {
            ty: TypeExpr::named(ongoing),
            elems: vec![Expr::key_value("mock", Expr::ident("verifier").field("mock"))],
        }
        .address_of(),
    ]));

    FuncDecl {
        doc: vec![],
        receiver: Some(Field::new("verifier", verifier_ptr.clone())),
        name: method.name.clone(),
        params: sig.go_params(),
        results: Results::Unnamed(vec![TypeExpr::named(ongoing).pointer()]),
        body: Block::new(body),
    }
}

/// History type of each parameter: `[]T`, or `[][]T` for the variadic one.
fn history_types(sig: &Signature) -> Vec<TypeExpr> {
    let fixed = sig.params.iter().map(|p| TypeExpr::named(&p.ty).slice());
    let variadic = sig
        .variadic
        .iter()
        .map(|p| TypeExpr::named(&p.ty).slice().slice());
    fixed.chain(variadic).collect()
}

/// `GetCapturedArguments`: the last recorded value of each parameter.
fn captured_arguments(sig: &Signature, receiver: Field) -> FuncDecl {
    let names: Vec<String> = (0..sig.arity()).map(positional_name).collect();
    let latest: Vec<TypeExpr> = history_types(sig)
        .into_iter()
        .map(|ty| match ty {
            TypeExpr::Slice(elem) => *elem,
            other => other,
        })
        .collect();

    let body = if names.is_empty() {
        vec![]
    } else {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        vec![
            Stmt::define(&refs, Expr::ident("c").method("GetAllCapturedArguments", vec![])),
            Stmt::ret(
                names
                    .iter()
                    .map(|name| {
                        Expr::ident(name).index(
                            Expr::len_of(Expr::ident(name)).binary(BinaryOp::Sub, Expr::Int(1)),
                        )
                    })
                    .collect(),
            ),
        ]
    };

    FuncDecl {
        doc: vec![],
        receiver: Some(receiver),
        name: "GetCapturedArguments".to_string(),
        params: vec![],
        results: if latest.is_empty() {
            Results::None
        } else {
            Results::Unnamed(latest)
        },
        body: Block::new(body),
    }
}

/// `GetAllCapturedArguments`: every recorded value of each parameter, in
/// invocation order.
///
/// The recorder returns one row per flattened parameter position, each row
/// holding one entry per invocation. Fixed parameter `i` is row `i`; the
/// variadic arguments of invocation `u` are column `u` of rows `N..`.
fn all_captured_arguments(
    ctx: &Context<'_>,
    method: &Method,
    sig: &Signature,
    receiver: Field,
) -> FuncDecl {
    let results: Vec<Field> = history_types(sig)
        .into_iter()
        .enumerate()
        .map(|(i, ty)| Field::new(positional_name(i), ty))
        .collect();

    let mut body = Vec::new();
    if !results.is_empty() {
        let mut fill = Vec::new();
        for (i, param) in sig.params.iter().enumerate() {
            let name = positional_name(i);
            fill.push(Stmt::assign(
                Expr::ident(&name),
                make(vec![
                    Expr::Type(TypeExpr::named(&param.ty).slice()),
                    invocation_count(),
                ]),
            ));
            fill.push(Stmt::range(
                "u",
                Some("param"),
                Expr::ident("params").index(Expr::Int(i as i64)),
                vec![narrow_into(
                    Expr::ident("param"),
                    &param.ty,
                    Stmt::assign(Expr::ident(&name).index(Expr::ident("u")), Expr::ident("v")),
                )],
            ));
        }
        if let Some(variadic) = &sig.variadic {
            fill.extend(variadic_history(sig.params.len(), &variadic.ty));
        }

        body.push(Stmt::define(
            &["params"],
            ctx.generic_mock(Expr::ident("c").field("mock"))
                .method("GetInvocationParams", vec![Expr::str(&method.name)]),
        ));
        body.push(Stmt::if_then(
            Expr::len_of(Expr::ident("params")).binary(BinaryOp::Gt, Expr::Int(0)),
            fill,
        ));
        body.push(Stmt::ret(vec![]));
    }

    FuncDecl {
        doc: vec![],
        receiver: Some(receiver),
        name: "GetAllCapturedArguments".to_string(),
        params: vec![],
        results: Results::Named(results),
        body: Block::new(body),
    }
}

/// Rebuild the per-invocation variadic slices from rows `first..`:
///
/// ```go
/// _paramN = make([][]T, len(params[0]))
/// for u := range _paramN {
///     _paramN[u] = make([]T, 0, len(params)-N)
///     for x := N; x < len(params); x++ {
///         if u < len(params[x]) {
///             if v, ok := params[x][u].(T); ok {
///                 _paramN[u] = append(_paramN[u], v)
///             }
///         }
///     }
/// }
/// ```
fn variadic_history(first: usize, elem: &str) -> Vec<Stmt> {
    let name = positional_name(first);
    let first = first as i64;
    let slot = || Expr::ident(&name).index(Expr::ident("u"));
    let row = || Expr::ident("params").index(Expr::ident("x"));

    let collect = Stmt::if_then(
        Expr::ident("u").binary(BinaryOp::Lt, Expr::len_of(row())),
        vec![narrow_into(
            row().index(Expr::ident("u")),
            elem,
            Stmt::assign(
                slot(),
                Expr::ident("append").call(vec![slot(), Expr::ident("v")]),
            ),
        )],
    );
    let rows = Stmt::For {
        init: Box::new(Stmt::define(&["x"], Expr::Int(first))),
        cond: Expr::ident("x").binary(BinaryOp::Lt, Expr::len_of(Expr::ident("params"))),
        post: Box::new(Stmt::Inc("x".to_string())),
        body: Block::new(vec![collect]),
    };

    vec![
        Stmt::assign(
            Expr::ident(&name),
            make(vec![
                Expr::Type(TypeExpr::named(elem).slice().slice()),
                invocation_count(),
            ]),
        ),
        Stmt::range(
            "u",
            None,
            Expr::ident(&name),
            vec![
                Stmt::assign(
                    slot(),
                    make(vec![
                        Expr::Type(TypeExpr::named(elem).slice()),
                        Expr::Int(0),
                        Expr::len_of(Expr::ident("params"))
                            .binary(BinaryOp::Sub, Expr::Int(first)),
                    ]),
                ),
                rows,
            ],
        ),
    ]
}

/// `if v, ok := value.(T); ok { then }`
fn narrow_into(value: Expr, ty: &str, then: Stmt) -> Stmt {
    Stmt::if_init(
        Stmt::define(&["v", "ok"], value.assert_to(TypeExpr::named(ty))),
        Expr::ident("ok"),
        vec![then],
    )
}

fn make(args: Vec<Expr>) -> Expr {
    Expr::ident("make").call(args)
}

/// `len(params[0])`: one entry per matching invocation.
fn invocation_count() -> Expr {
    Expr::len_of(Expr::ident("params").index(Expr::Int(0)))
}
