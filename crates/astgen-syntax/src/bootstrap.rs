//! The `Expr` schema the generator ships with.
//!
//! Running `astgen <dir>` without `--schema` generates this family. The
//! lines are kept in declaration order; the emitted text depends on it.

/// Base type name of the bootstrap schema.
pub const EXPR_BASE: &str = "Expr";

/// Node specifications of the bootstrap schema.
pub const EXPR_SPECS: &[&str] = &[
    "Binary | Expr, Token, Expr",
    "MsgEmission | Option<Box<Expr>>, Token, Option<Box<Expr>>",
    "BinaryOpt | Expr, Token, Option<Box<Expr>>",
    "Asm | Expr, Expr",
    "Object | Vec<Expr>",
    "Fn | Vec<Expr>, Expr",
    "CodeBlock | Vec<Expr>",
    "Type | Vec<Expr>",
    "Literal | Literal",
];
