//! Expression nodes.
//!
//! Every expression carries the [`TypeTag`] resolved for it by the
//! semantic pass. Code generation reads the tag; it never infers one.

use pcl_core::{Span, TypeTag};

use crate::ops::BinaryOp;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Numeric literal
    Literal(LiteralExpr<'ast>),
    /// Variable reference
    Ident(IdentExpr<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary minus
    Negate(&'ast NegateExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Ident(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Negate(e) => e.span,
        }
    }

    /// Get the resolved type of this expression.
    pub fn ty(&self) -> TypeTag {
        match self {
            Self::Literal(e) => e.ty,
            Self::Ident(e) => e.ty,
            Self::Binary(e) => e.ty,
            Self::Negate(e) => e.ty,
        }
    }

    /// Whether this is a comparison, i.e. only valid as a condition.
    pub fn is_comparison(&self) -> bool {
        matches!(self, Self::Binary(b) if b.op.is_comparison())
    }
}

/// Literal spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Integer constant, e.g. `42`
    Integer,
    /// Decimal constant, e.g. `3.14`
    Real,
}

/// A numeric literal, kept in its source spelling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    /// Which literal form the front end recognized
    pub kind: LiteralKind,
    /// Source text, passed through to the assembler unchanged
    pub text: &'ast str,
    /// Resolved type
    pub ty: TypeTag,
    /// Source location
    pub span: Span,
}

/// A reference to a declared variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentExpr<'ast> {
    /// Variable name
    pub name: &'ast str,
    /// Resolved type
    pub ty: TypeTag,
    /// Source location
    pub span: Span,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Resolved result type
    pub ty: TypeTag,
    /// Source location
    pub span: Span,
}

/// Unary minus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegateExpr<'ast> {
    /// Operand
    pub operand: &'ast Expr<'ast>,
    /// Resolved result type
    pub ty: TypeTag,
    /// Source location
    pub span: Span,
}
