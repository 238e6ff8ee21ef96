//! Binary expression compilation.
//!
//! Arithmetic operators leave their result on the stack. Relational
//! operators never produce a value: they compile to a conditional branch to
//! a label supplied by the enclosing statement.

use pcl_ast::BinaryExpr;
use pcl_core::{CodegenError, CodegenWarning};

use super::{ExprCompiler, Result};
use crate::bytecode::Label;
use crate::operators::{ComparisonBranch, resolve_arithmetic, resolve_comparison};

/// Compile an arithmetic operation in value position.
///
/// ```text
/// [left]
/// [right]
/// iadd | isub | imul | idiv | fadd | fsub | fmul | fdiv | ????
/// ```
pub fn compile_arithmetic<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    binary: &BinaryExpr<'ast>,
) -> Result<()> {
    if binary.op.is_comparison() {
        return Err(CodegenError::ComparisonOutsideCondition {
            op: binary.op.to_string(),
            span: binary.span,
        });
    }

    compiler.compile(binary.left)?;
    compiler.compile(binary.right)?;

    let (left, right) = (binary.left.ty(), binary.right.ty());
    let opcode = resolve_arithmetic(binary.op, left, right);
    if opcode.is_placeholder() {
        compiler.ctx_mut().warn(CodegenWarning::UnresolvedOperator {
            op: binary.op.to_string(),
            left,
            right,
            span: binary.span,
        });
    }
    compiler.emitter().emit(opcode);
    Ok(())
}

/// Compile a comparison that branches to `target` when true.
///
/// Integers:
/// ```text
/// [left]
/// [right]
/// if_icmp<cond> target
/// ```
///
/// Reals:
/// ```text
/// [left]
/// [right]
/// fcmpl | fcmpg
/// if<cond> target
/// ```
pub fn compile_comparison<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    binary: &BinaryExpr<'ast>,
    target: Label,
) -> Result<()> {
    compiler.compile(binary.left)?;
    compiler.compile(binary.right)?;

    let (left, right) = (binary.left.ty(), binary.right.ty());
    let selected = resolve_comparison(binary.op, left, right);
    if selected.is_placeholder() {
        compiler.ctx_mut().warn(CodegenWarning::UnresolvedComparison {
            op: binary.op.to_string(),
            left,
            right,
            span: binary.span,
        });
    }

    let emitter = compiler.emitter();
    match selected {
        ComparisonBranch::Direct(branch) => emitter.emit_branch(branch, target),
        ComparisonBranch::ViaCompare { compare, branch } => {
            emitter.emit(compare);
            emitter.emit_branch(branch, target);
        }
    }
    Ok(())
}
