//! If/else statement compilation.
//!
//! Every `if` allocates three fresh labels: entry, true branch and join.
//! The condition jumps to the true branch when it holds, so the false path
//! is the fall-through.

use pcl_ast::{Block, IfStmt};

use super::{Result, StmtCompiler};
use crate::bytecode::Label;

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Compile an if statement.
    pub fn compile_if(&mut self, if_stmt: &IfStmt<'ast>) -> Result<()> {
        let shape = if if_stmt.else_body.is_some() {
            "with else"
        } else {
            "no else"
        };
        log::debug!("if at {} ({shape})", if_stmt.span);

        let entry = self.emitter.new_label();
        let on_true = self.emitter.new_label();
        let join = self.emitter.new_label();

        self.emitter.define_label(entry);
        self.expr_compiler()
            .compile_condition(if_stmt.condition, on_true)?;

        match &if_stmt.else_body {
            Some(else_body) => self.compile_if_else(&if_stmt.then_body, else_body, on_true, join),
            None => self.compile_if_only(&if_stmt.then_body, on_true, join),
        }
    }

    /// Compile if without else branch.
    ///
    /// Layout:
    /// ```text
    /// entry:
    /// [condition] -> on_true
    /// goto join
    /// on_true:
    /// [then]
    /// join:
    /// ```
    fn compile_if_only(
        &mut self,
        then_body: &Block<'ast>,
        on_true: Label,
        join: Label,
    ) -> Result<()> {
        self.emitter.emit_goto(join);

        self.emitter.define_label(on_true);
        self.compile_block(then_body)?;

        self.emitter.define_label(join);
        Ok(())
    }

    /// Compile if with else branch.
    ///
    /// Layout:
    /// ```text
    /// entry:
    /// [condition] -> on_true
    /// [else]
    /// goto join
    /// on_true:
    /// [then]
    /// goto join
    /// join:
    /// ```
    fn compile_if_else(
        &mut self,
        then_body: &Block<'ast>,
        else_body: &Block<'ast>,
        on_true: Label,
        join: Label,
    ) -> Result<()> {
        self.compile_block(else_body)?;
        self.emitter.emit_goto(join);

        self.emitter.define_label(on_true);
        self.compile_block(then_body)?;
        self.emitter.emit_goto(join);

        self.emitter.define_label(join);
        Ok(())
    }
}
