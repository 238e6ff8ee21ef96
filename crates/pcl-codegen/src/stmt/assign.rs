//! Assignment statement compilation.

use pcl_ast::AssignStmt;
use pcl_core::CodegenWarning;

use super::{Result, StmtCompiler};

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Compile `target := value`.
    ///
    /// The store uses the target's declared descriptor, the same one its
    /// loads use. A value of another type records
    /// [`CodegenWarning::AssignmentTypeMismatch`]; nothing is converted.
    ///
    /// ```text
    /// [value]
    /// putstatic <Unit>/<target> <descriptor>
    /// ```
    pub fn compile_assign(&mut self, assign: &AssignStmt<'ast>) -> Result<()> {
        log::debug!("assignment to '{}' at {}", assign.target.name, assign.span);

        self.expr_compiler().compile(assign.value)?;

        let storage = self.ctx.resolve_variable(&assign.target);
        let value = assign.value.ty();
        if value != storage.ty {
            self.ctx.warn(CodegenWarning::AssignmentTypeMismatch {
                name: assign.target.name.to_string(),
                target: storage.ty,
                value,
                span: assign.span,
            });
        }

        let field = self.ctx.field(assign.target.name, storage.descriptor);
        self.emitter.emit_put_static(field);
        Ok(())
    }
}
