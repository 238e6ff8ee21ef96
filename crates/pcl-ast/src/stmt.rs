//! Statement nodes.

use pcl_core::Span;

use crate::expr::{Expr, IdentExpr};

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// `x := expr`
    Assign(AssignStmt<'ast>),
    /// `begin ... end`
    Block(Block<'ast>),
    /// `if cond then ... [else ...]`
    If(&'ast IfStmt<'ast>),
    /// Post-test loop: body, then condition
    Loop(&'ast LoopStmt<'ast>),
    /// `print('fmt', args...)`
    Print(PrintStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Assign(s) => s.span,
            Self::Block(s) => s.span,
            Self::If(s) => s.span,
            Self::Loop(s) => s.span,
            Self::Print(s) => s.span,
        }
    }
}

/// An assignment to a declared variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    /// The variable written
    pub target: IdentExpr<'ast>,
    /// The value stored
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An ordered list of statements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    /// Statements in the block
    pub stmts: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// A conditional with an optional else branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    /// Comparison deciding which branch runs
    pub condition: &'ast Expr<'ast>,
    /// Runs when the condition holds
    pub then_body: Block<'ast>,
    /// Runs otherwise
    pub else_body: Option<Block<'ast>>,
    /// Source location
    pub span: Span,
}

/// A loop whose condition is tested after each pass through the body.
///
/// The body always runs at least once; a true condition repeats it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopStmt<'ast> {
    /// Loop body
    pub body: Block<'ast>,
    /// Comparison tested after the body
    pub condition: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A formatted print.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintStmt<'ast> {
    /// Format literal including its surrounding single quotes
    pub format: &'ast str,
    /// Values substituted into the format
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}
