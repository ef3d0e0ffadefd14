// src/codegen/context.rs
//
// Generation context shared by the emitters: the resolved alias table, the
// namespace being generated into, and helpers for naming recorder API items.

use crate::errors::GenerateError;
use crate::identity::AliasTable;
use crate::model::{Interface, Method, Type};
use crate::syntax::{Expr, TypeExpr};

use super::{GenerateOptions, REFLECT_PATH};

pub(crate) struct Context<'a> {
    pub aliases: &'a AliasTable,
    pub self_package: Option<&'a str>,
    pub fail_handler_default: &'a str,
    /// Local name of the recorder package.
    recorder: &'a str,
    reflect: &'a str,
}

impl<'a> Context<'a> {
    pub fn new(aliases: &'a AliasTable, options: &'a GenerateOptions) -> Self {
        // Both fixed paths are allocated before the context is built.
        let recorder = aliases
            .alias_of(&options.recorder.import_path)
            .unwrap_or("pegomock");
        let reflect = aliases.alias_of(REFLECT_PATH).unwrap_or("reflect");
        Self {
            aliases,
            self_package: options.self_package.as_deref(),
            fail_handler_default: &options.recorder.fail_handler_default,
            recorder,
            reflect,
        }
    }

    /// `recorder.Name` as a type.
    pub fn recorder_type(&self, name: &str) -> TypeExpr {
        TypeExpr::named(format!("{}.{}", self.recorder, name))
    }

    /// `recorder.Name` as a value.
    pub fn recorder_item(&self, name: &str) -> Expr {
        Expr::ident(self.recorder).field(name)
    }

    /// `recorder.GetGenericMockFrom(mock)`
    pub fn generic_mock(&self, mock: Expr) -> Expr {
        self.recorder_item("GetGenericMockFrom").call(vec![mock])
    }

    /// `reflect.TypeOf((*T)(nil)).Elem()`
    pub fn reflect_type_of(&self, ty: &str) -> Expr {
        Expr::ident(self.reflect)
            .method(
                "TypeOf",
                vec![
                    Expr::Type(TypeExpr::named(ty).pointer())
                        .paren()
                        .call(vec![Expr::nil()]),
                ],
            )
            .method("Elem", vec![])
    }

    pub fn reflect_type(&self) -> TypeExpr {
        TypeExpr::named(format!("{}.Type", self.reflect))
    }

    /// Render a model type, mapping a missing alias to a generation error
    /// that names the offending method.
    pub fn render(
        &self,
        iface: &Interface,
        method: &Method,
        ty: &Type,
    ) -> Result<String, GenerateError> {
        ty.render(self.aliases, self.self_package)
            .map_err(|source| GenerateError::UnresolvedType {
                interface: iface.name.clone(),
                method: method.name.clone(),
                source,
            })
    }
}

pub(crate) fn mock_name(iface: &Interface) -> String {
    format!("Mock{}", iface.name)
}

pub(crate) fn verifier_name(iface: &Interface) -> String {
    format!("Verifier{}", iface.name)
}

pub(crate) fn ongoing_verification_name(iface: &Interface, method: &Method) -> String {
    format!("{}_{}_OngoingVerification", iface.name, method.name)
}
