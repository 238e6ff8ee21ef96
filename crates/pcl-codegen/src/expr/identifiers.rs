//! Variable reference compilation.

use pcl_ast::IdentExpr;

use super::{ExprCompiler, Result};

/// Compile a variable reference: load the static field.
///
/// The descriptor comes from the declaration when there is one; see
/// [`GenerationContext::resolve_variable`](crate::context::GenerationContext::resolve_variable).
pub fn compile_ident<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    ident: &IdentExpr<'ast>,
) -> Result<()> {
    let storage = compiler.ctx_mut().resolve_variable(ident);
    let field = compiler.ctx().field(ident.name, storage.descriptor);
    compiler.emitter().emit_get_static(field);
    Ok(())
}
