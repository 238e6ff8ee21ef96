//! Expression compiler.
//!
//! The [`ExprCompiler`] lowers expressions in post-order: operands first,
//! then the operator. Two entry points exist:
//! - `compile()` - value position, leaves exactly one value on the stack
//! - `compile_condition()` - a relational expression that branches to the
//!   given label when true and falls through otherwise
//!
//! Instructions are selected from the resolved types already attached to the
//! tree. No type is ever inferred here.
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = ExprCompiler::new(&mut ctx, &mut emitter);
//!
//! // Push the value of `a + b`
//! compiler.compile(&sum)?;
//!
//! // Branch to `target` when `a > b`
//! compiler.compile_condition(&comparison, target)?;
//! ```

mod binary;
mod identifiers;
mod literals;
mod unary;

use pcl_ast::Expr;
use pcl_core::CodegenError;

use crate::bytecode::Label;
use crate::context::GenerationContext;
use crate::emit::JasminEmitter;

type Result<T> = std::result::Result<T, CodegenError>;

/// Compiles expressions to Jasmin instructions.
pub struct ExprCompiler<'a, 'ast> {
    /// Shared per-unit state
    ctx: &'a mut GenerationContext<'ast>,
    /// Output
    emitter: &'a mut JasminEmitter,
}

impl<'a, 'ast> ExprCompiler<'a, 'ast> {
    /// Create a new expression compiler.
    pub fn new(ctx: &'a mut GenerationContext<'ast>, emitter: &'a mut JasminEmitter) -> Self {
        Self { ctx, emitter }
    }

    /// Compile an expression in value position.
    ///
    /// Fails with [`CodegenError::ComparisonOutsideCondition`] if a
    /// relational expression is found, since comparisons only lower to
    /// branches.
    pub fn compile(&mut self, expr: &Expr<'ast>) -> Result<()> {
        match expr {
            Expr::Literal(lit) => literals::compile_literal(self, lit),
            Expr::Ident(ident) => identifiers::compile_ident(self, ident),
            Expr::Binary(binary) => binary::compile_arithmetic(self, binary),
            Expr::Negate(negate) => unary::compile_negate(self, negate),
        }
    }

    /// Compile a condition that jumps to `target` when it holds.
    ///
    /// Fails with [`CodegenError::NonRelationalCondition`] if `expr` is not a
    /// comparison.
    pub fn compile_condition(&mut self, expr: &Expr<'ast>, target: Label) -> Result<()> {
        match expr {
            Expr::Binary(binary) if binary.op.is_comparison() => {
                binary::compile_comparison(self, binary, target)
            }
            _ => Err(CodegenError::NonRelationalCondition { span: expr.span() }),
        }
    }

    pub(crate) fn ctx(&self) -> &GenerationContext<'ast> {
        self.ctx
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut GenerationContext<'ast> {
        self.ctx
    }

    pub(crate) fn emitter(&mut self) -> &mut JasminEmitter {
        self.emitter
    }
}
