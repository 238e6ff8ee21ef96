//! Arena tree construction.

use std::cell::Cell;

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use pcl_core::{Span, TypeTag};

use crate::decl::{Program, VarDecl};
use crate::expr::{BinaryExpr, Expr, IdentExpr, LiteralExpr, LiteralKind, NegateExpr};
use crate::ops::BinaryOp;
use crate::stmt::{AssignStmt, Block, IfStmt, LoopStmt, PrintStmt, Stmt};

/// Allocates annotated tree nodes in an arena.
///
/// The builder does no checking. Types passed in are attached as-is, the
/// same way a semantic pass would attach them. Nodes get the position set by
/// [`at`](Self::at), or `Span::default()` if none was set.
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    span: Cell<Span>,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder allocating into `arena`.
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            span: Cell::new(Span::default()),
        }
    }

    /// Set the position used for nodes built from now on.
    pub fn at(&self, line: u32, col: u32) -> &Self {
        self.span.set(Span::point(line, col));
        self
    }

    fn here(&self) -> Span {
        self.span.get()
    }

    fn str(&self, s: &str) -> &'ast str {
        self.arena.alloc_str(s)
    }

    fn slice<T, I>(&self, items: I) -> &'ast [T]
    where
        I: IntoIterator<Item = T>,
    {
        BumpVec::from_iter_in(items, self.arena).into_bump_slice()
    }

    // ==========================================================================
    // Expressions
    // ==========================================================================

    /// Integer literal typed `Integer`.
    pub fn int(&self, text: &str) -> Expr<'ast> {
        self.literal(LiteralKind::Integer, text, TypeTag::Integer)
    }

    /// Decimal literal typed `Real`.
    pub fn real(&self, text: &str) -> Expr<'ast> {
        self.literal(LiteralKind::Real, text, TypeTag::Real)
    }

    /// Literal with an explicit type.
    pub fn literal(&self, kind: LiteralKind, text: &str, ty: TypeTag) -> Expr<'ast> {
        Expr::Literal(LiteralExpr {
            kind,
            text: self.str(text),
            ty,
            span: self.here(),
        })
    }

    /// Variable reference node.
    pub fn ident(&self, name: &str, ty: TypeTag) -> IdentExpr<'ast> {
        IdentExpr {
            name: self.str(name),
            ty,
            span: self.here(),
        }
    }

    /// Variable reference expression.
    pub fn var(&self, name: &str, ty: TypeTag) -> Expr<'ast> {
        Expr::Ident(self.ident(name, ty))
    }

    /// Binary operation. The span covers both operands when they have one.
    pub fn binary(
        &self,
        left: Expr<'ast>,
        op: BinaryOp,
        right: Expr<'ast>,
        ty: TypeTag,
    ) -> Expr<'ast> {
        let span = if left.span().is_known() {
            left.span().to(right.span())
        } else {
            self.here()
        };
        Expr::Binary(self.arena.alloc(BinaryExpr {
            left: self.arena.alloc(left),
            op,
            right: self.arena.alloc(right),
            ty,
            span,
        }))
    }

    /// Unary minus.
    pub fn neg(&self, operand: Expr<'ast>, ty: TypeTag) -> Expr<'ast> {
        Expr::Negate(self.arena.alloc(NegateExpr {
            operand: self.arena.alloc(operand),
            ty,
            span: self.here(),
        }))
    }

    // ==========================================================================
    // Statements
    // ==========================================================================

    /// `name := value`, where `ty` is the target's annotated type.
    pub fn assign(&self, name: &str, ty: TypeTag, value: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Assign(AssignStmt {
            target: self.ident(name, ty),
            value: self.arena.alloc(value),
            span: self.here(),
        })
    }

    /// Statement list.
    pub fn block<I>(&self, stmts: I) -> Block<'ast>
    where
        I: IntoIterator<Item = Stmt<'ast>>,
    {
        Block {
            stmts: self.slice(stmts),
            span: self.here(),
        }
    }

    /// `begin ... end` as a statement.
    pub fn compound<I>(&self, stmts: I) -> Stmt<'ast>
    where
        I: IntoIterator<Item = Stmt<'ast>>,
    {
        Stmt::Block(self.block(stmts))
    }

    /// `if condition then ...`
    pub fn if_then<I>(&self, condition: Expr<'ast>, then_body: I) -> Stmt<'ast>
    where
        I: IntoIterator<Item = Stmt<'ast>>,
    {
        let span = self.here();
        Stmt::If(self.arena.alloc(IfStmt {
            condition: self.arena.alloc(condition),
            then_body: self.block(then_body),
            else_body: None,
            span,
        }))
    }

    /// `if condition then ... else ...`
    pub fn if_then_else<I, E>(
        &self,
        condition: Expr<'ast>,
        then_body: I,
        else_body: E,
    ) -> Stmt<'ast>
    where
        I: IntoIterator<Item = Stmt<'ast>>,
        E: IntoIterator<Item = Stmt<'ast>>,
    {
        let span = self.here();
        Stmt::If(self.arena.alloc(IfStmt {
            condition: self.arena.alloc(condition),
            then_body: self.block(then_body),
            else_body: Some(self.block(else_body)),
            span,
        }))
    }

    /// Post-test loop: the body runs, then `condition` decides whether to
    /// run it again.
    pub fn repeat<I>(&self, body: I, condition: Expr<'ast>) -> Stmt<'ast>
    where
        I: IntoIterator<Item = Stmt<'ast>>,
    {
        let span = self.here();
        Stmt::Loop(self.arena.alloc(LoopStmt {
            body: self.block(body),
            condition: self.arena.alloc(condition),
            span,
        }))
    }

    /// `print(format, args...)`. `format` keeps its single quotes.
    pub fn print<I>(&self, format: &str, args: I) -> Stmt<'ast>
    where
        I: IntoIterator<Item = Expr<'ast>>,
    {
        Stmt::Print(PrintStmt {
            format: self.str(format),
            args: self.slice(args),
            span: self.here(),
        })
    }

    // ==========================================================================
    // Declarations
    // ==========================================================================

    /// `name: ty`
    pub fn decl(&self, name: &str, ty: TypeTag) -> VarDecl<'ast> {
        VarDecl {
            name: self.str(name),
            ty,
            span: self.here(),
        }
    }

    /// A program without source text.
    pub fn program<D, S>(&self, name: &str, decls: D, stmts: S) -> Program<'ast>
    where
        D: IntoIterator<Item = VarDecl<'ast>>,
        S: IntoIterator<Item = Stmt<'ast>>,
    {
        Program {
            name: self.str(name),
            decls: self.slice(decls),
            body: self.block(stmts),
            source: None,
            span: Span::point(1, 1),
        }
    }

    /// A program that keeps its source text for line annotations.
    pub fn program_with_source<D, S>(
        &self,
        name: &str,
        source: &str,
        decls: D,
        stmts: S,
    ) -> Program<'ast>
    where
        D: IntoIterator<Item = VarDecl<'ast>>,
        S: IntoIterator<Item = Stmt<'ast>>,
    {
        Program {
            source: Some(self.str(source)),
            ..self.program(name, decls, stmts)
        }
    }
}
