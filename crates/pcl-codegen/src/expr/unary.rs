//! Unary minus compilation.

use pcl_ast::NegateExpr;
use pcl_core::CodegenWarning;

use super::{ExprCompiler, Result};
use crate::operators::resolve_negation;

/// Compile `-operand`.
///
/// The instruction follows the operand's type: `ineg`, `fneg`, or the `?neg`
/// placeholder.
pub fn compile_negate<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    negate: &NegateExpr<'ast>,
) -> Result<()> {
    compiler.compile(negate.operand)?;

    let operand = negate.operand.ty();
    let opcode = resolve_negation(operand);
    if opcode.is_placeholder() {
        compiler.ctx_mut().warn(CodegenWarning::UnresolvedNegation {
            operand,
            span: negate.span,
        });
    }
    compiler.emitter().emit(opcode);
    Ok(())
}
