// src/syntax/mod.rs
//! A small Go syntax tree.
//!
//! Covers exactly what generated mocks need: struct and function
//! declarations, a handful of statements and expressions. The emitters build
//! these nodes and `fmt::printer` turns them into text.

mod build;

/// A complete generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Leading `//` comment lines, without the slashes.
    pub header: Vec<String>,
    pub package: String,
    pub imports: Vec<Import>,
    pub decls: Vec<Decl>,
}

/// One import spec. `name` is the local alias, `.` for dot imports.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub name: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Struct(StructDecl),
    Func(FuncDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub doc: Vec<String>,
    pub name: String,
    pub fields: Vec<Field>,
}

/// A struct field, receiver or named result.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub doc: Vec<String>,
    pub receiver: Option<Field>,
    pub name: String,
    pub params: Vec<Param>,
    pub results: Results,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
    /// Rendered as `name ...ty`.
    pub variadic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Results {
    None,
    Unnamed(Vec<TypeExpr>),
    Named(Vec<Field>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `a, b := value`
    Define { names: Vec<String>, value: Expr },
    /// `target = value`
    Assign { target: Expr, value: Expr },
    /// `var name ty`
    Var { name: String, ty: TypeExpr },
    /// `name++`
    Inc(String),
    Expr(Expr),
    /// `return a, b`; a bare `return` when empty.
    Return(Vec<Expr>),
    If {
        init: Option<Box<Stmt>>,
        cond: Expr,
        then: Block,
    },
    /// `for key, value := range over`
    Range {
        key: String,
        value: Option<String>,
        over: Expr,
        body: Block,
    },
    /// `for init; cond; post`
    For {
        init: Box<Stmt>,
        cond: Expr,
        post: Box<Stmt>,
        body: Block,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    /// A string literal; quoted and escaped by the printer.
    Str(String),
    Int(i64),
    Bool(bool),
    Selector(Box<Expr>, String),
    Call { func: Box<Expr>, args: Vec<Expr> },
    Index(Box<Expr>, Box<Expr>),
    TypeAssert(Box<Expr>, TypeExpr),
    /// `ty{elems...}`
    Composite { ty: TypeExpr, elems: Vec<Expr> },
    KeyValue(String, Box<Expr>),
    AddressOf(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// A type in expression position, e.g. the first argument of `make`.
    Type(TypeExpr),
    Paren(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Sub,
    Lt,
    Gt,
    Ne,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Sub => "-",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Ne => "!=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// Any type already rendered to source, e.g. `map[string]io.Reader`.
    Named(String),
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
}
