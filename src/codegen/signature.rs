// src/codegen/signature.rs
//
// A method signature with parameter names made safe for generated bodies and
// every type rendered once.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;

use crate::errors::GenerateError;
use crate::identity::is_reserved;
use crate::model::{Interface, Method, Parameter};
use crate::syntax::{Expr, Param, Results, Stmt, TypeExpr};

use super::context::Context;

/// Identifiers the generated method bodies declare or use as receivers.
const GENERATED_LOCALS: &[&str] = &[
    "c", "mock", "ok", "param", "params", "r", "result", "u", "v", "verifier", "x",
];

pub(crate) struct SigParam {
    pub name: String,
    pub ty: String,
}

pub(crate) struct Signature {
    pub params: Vec<SigParam>,
    /// Element type of the trailing variadic parameter.
    pub variadic: Option<SigParam>,
    pub results: Vec<String>,
}

impl Signature {
    pub fn new(ctx: &Context<'_>, iface: &Interface, method: &Method) -> Result<Self, GenerateError> {
        // Unqualified type names the body spells out; a parameter must not
        // shadow them.
        let mut type_names = BTreeSet::new();
        for ty in method.all_params().map(|p| &p.ty).chain(&method.results) {
            ty.collect_unqualified_names(ctx.self_package, &mut type_names);
        }

        let mut seen = FxHashSet::default();
        let mut convert = |index: usize, param: &Parameter| -> Result<SigParam, GenerateError> {
            let name = if needs_rename(ctx, &param.name)
                || type_names.contains(&param.name)
                || !seen.insert(param.name.clone())
            {
                positional_name(index)
            } else {
                param.name.clone()
            };
            Ok(SigParam {
                name,
                ty: ctx.render(iface, method, &param.ty)?,
            })
        };

        let mut params = Vec::with_capacity(method.params.len());
        for (index, param) in method.params.iter().enumerate() {
            params.push(convert(index, param)?);
        }
        let variadic = match &method.variadic {
            Some(param) => Some(convert(method.params.len(), param)?),
            None => None,
        };
        let results = method
            .results
            .iter()
            .map(|ty| ctx.render(iface, method, ty))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            params,
            variadic,
            results,
        })
    }

    /// Declared parameter count, the variadic one included.
    pub fn arity(&self) -> usize {
        self.params.len() + usize::from(self.variadic.is_some())
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    /// Parameters as declared in a Go signature, the variadic one as `...T`.
    pub fn go_params(&self) -> Vec<Param> {
        let fixed = self.params.iter().map(|p| Param {
            name: p.name.clone(),
            ty: TypeExpr::named(p.ty.clone()),
            variadic: false,
        });
        let variadic = self.variadic.iter().map(|p| Param {
            name: p.name.clone(),
            ty: TypeExpr::named(p.ty.clone()),
            variadic: true,
        });
        fixed.chain(variadic).collect()
    }

    pub fn go_results(&self) -> Results {
        if self.results.is_empty() {
            Results::None
        } else {
            Results::Unnamed(self.results.iter().map(TypeExpr::named).collect())
        }
    }

    /// Pack every argument into `params`, one element per variadic argument:
    ///
    /// ```go
    /// params := []pegomock.Param{a, b}
    /// for _, param := range rest {
    ///     params = append(params, param)
    /// }
    /// ```
    pub fn pack_params(&self, ctx: &Context<'_>) -> Vec<Stmt> {
        let elems = self.params.iter().map(|p| Expr::ident(&p.name)).collect();
        let mut stmts = vec![Stmt::define(
            &["params"],
            Expr::Composite {
                ty: ctx.recorder_type("Param").slice(),
                elems,
            },
        )];
        if let Some(variadic) = &self.variadic {
            stmts.push(Stmt::range(
                "_",
                Some("param"),
                Expr::ident(&variadic.name),
                vec![Stmt::assign(
                    Expr::ident("params"),
                    Expr::ident("append").call(vec![Expr::ident("params"), Expr::ident("param")]),
                )],
            ));
        }
        stmts
    }
}

/// Name used for the parameter at `index` when its declared name can't be
/// used, and for the named results of `GetAllCapturedArguments`.
pub(crate) fn positional_name(index: usize) -> String {
    format!("_param{}", index)
}

fn needs_rename(ctx: &Context<'_>, name: &str) -> bool {
    name.is_empty()
        || name == "_"
        || name.starts_with("_param")
        || is_reserved(name)
        || GENERATED_LOCALS.contains(&name)
        || is_result_local(name)
        || ctx.aliases.is_allocated(name)
}

/// `ret0`, `ret1`, ... hold narrowed results in the recording stub.
fn is_result_local(name: &str) -> bool {
    name.strip_prefix("ret")
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
