//! Loop compilation.
//!
//! Loops are post-test: the body always runs once, then the condition
//! decides whether to jump back to the top.

use pcl_ast::LoopStmt;

use super::{Result, StmtCompiler};

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Compile a loop.
    ///
    /// Layout:
    /// ```text
    /// top:
    /// [body]
    /// [condition] -> top
    /// ```
    pub fn compile_loop(&mut self, loop_stmt: &LoopStmt<'ast>) -> Result<()> {
        log::debug!("loop at {}", loop_stmt.span);

        let top = self.emitter.new_label();
        self.emitter.define_label(top);

        self.compile_block(&loop_stmt.body)?;

        self.expr_compiler()
            .compile_condition(loop_stmt.condition, top)
    }
}
