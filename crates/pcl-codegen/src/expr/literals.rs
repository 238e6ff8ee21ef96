//! Literal expression compilation.

use pcl_ast::LiteralExpr;

use super::{ExprCompiler, Result};

/// Compile a numeric literal.
///
/// The literal's source text is loaded verbatim, so `3.50` stays `3.50`.
pub fn compile_literal(compiler: &mut ExprCompiler<'_, '_>, lit: &LiteralExpr<'_>) -> Result<()> {
    compiler.emitter().emit_ldc(lit.text);
    Ok(())
}
