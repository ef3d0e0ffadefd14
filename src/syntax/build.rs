// src/syntax/build.rs
//! Fluent constructors for syntax nodes.

use super::{BinaryOp, Block, Expr, Field, Stmt, TypeExpr};

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn nil() -> Self {
        Expr::ident("nil")
    }

    /// `self.name`
    pub fn field(self, name: impl Into<String>) -> Self {
        Expr::Selector(Box::new(self), name.into())
    }

    /// `self(args...)`
    pub fn call(self, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(self),
            args,
        }
    }

    /// `self.name(args...)`
    pub fn method(self, name: impl Into<String>, args: Vec<Expr>) -> Self {
        self.field(name).call(args)
    }

    /// `self[index]`
    pub fn index(self, index: Expr) -> Self {
        Expr::Index(Box::new(self), Box::new(index))
    }

    /// `self.(ty)`
    pub fn assert_to(self, ty: TypeExpr) -> Self {
        Expr::TypeAssert(Box::new(self), ty)
    }

    pub fn address_of(self) -> Self {
        Expr::AddressOf(Box::new(self))
    }

    pub fn binary(self, op: BinaryOp, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn paren(self) -> Self {
        Expr::Paren(Box::new(self))
    }

    pub fn key_value(key: impl Into<String>, value: Expr) -> Self {
        Expr::KeyValue(key.into(), Box::new(value))
    }

    /// `len(expr)`
    pub fn len_of(expr: Expr) -> Self {
        Expr::ident("len").call(vec![expr])
    }
}

impl TypeExpr {
    pub fn named(text: impl Into<String>) -> Self {
        TypeExpr::Named(text.into())
    }

    pub fn pointer(self) -> Self {
        TypeExpr::Pointer(Box::new(self))
    }

    pub fn slice(self) -> Self {
        TypeExpr::Slice(Box::new(self))
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Field {
            name: name.into(),
            ty,
        }
    }
}

impl Stmt {
    pub fn define(names: &[&str], value: Expr) -> Self {
        Stmt::Define {
            names: names.iter().map(|n| n.to_string()).collect(),
            value,
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Stmt::Assign { target, value }
    }

    pub fn var(name: impl Into<String>, ty: TypeExpr) -> Self {
        Stmt::Var {
            name: name.into(),
            ty,
        }
    }

    pub fn ret(values: Vec<Expr>) -> Self {
        Stmt::Return(values)
    }

    pub fn if_then(cond: Expr, then: Vec<Stmt>) -> Self {
        Stmt::If {
            init: None,
            cond,
            then: Block::new(then),
        }
    }

    /// `if init; cond { then }`
    pub fn if_init(init: Stmt, cond: Expr, then: Vec<Stmt>) -> Self {
        Stmt::If {
            init: Some(Box::new(init)),
            cond,
            then: Block::new(then),
        }
    }

    pub fn range(
        key: impl Into<String>,
        value: Option<&str>,
        over: Expr,
        body: Vec<Stmt>,
    ) -> Self {
        Stmt::Range {
            key: key.into(),
            value: value.map(str::to_string),
            over,
            body: Block::new(body),
        }
    }
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
