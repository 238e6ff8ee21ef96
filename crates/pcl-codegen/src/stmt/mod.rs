//! Statement compiler.
//!
//! The [`StmtCompiler`] lowers statements into the body of `main`:
//! - Assignments store into static fields
//! - Compound statements lower each statement in order
//! - `if` and loops become labeled branches
//! - `print` becomes a `printf` call with boxed arguments
//!
//! Before each statement that starts a new source line, the compiler can
//! echo that line as a comment and emit a `.line` directive.
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = StmtCompiler::new(&mut ctx, &mut emitter);
//! compiler.compile_block(&program.body)?;
//! ```

mod assign;
mod if_stmt;
mod loop_stmt;
mod print_stmt;

use pcl_ast::{Block, Stmt};
use pcl_core::{CodegenError, Span};

use crate::context::GenerationContext;
use crate::emit::JasminEmitter;
use crate::expr::ExprCompiler;

type Result<T> = std::result::Result<T, CodegenError>;

/// Compiles statements to Jasmin instructions.
pub struct StmtCompiler<'a, 'ast> {
    /// Shared per-unit state
    ctx: &'a mut GenerationContext<'ast>,
    /// Output
    emitter: &'a mut JasminEmitter,
}

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Create a new statement compiler.
    pub fn new(ctx: &'a mut GenerationContext<'ast>, emitter: &'a mut JasminEmitter) -> Self {
        Self { ctx, emitter }
    }

    /// Compile a statement.
    pub fn compile(&mut self, stmt: &Stmt<'ast>) -> Result<()> {
        self.annotate(stmt.span());

        match stmt {
            Stmt::Assign(assign) => self.compile_assign(assign),
            Stmt::Block(block) => self.compile_block(block),
            Stmt::If(if_stmt) => self.compile_if(if_stmt),
            Stmt::Loop(loop_stmt) => self.compile_loop(loop_stmt),
            Stmt::Print(print) => self.compile_print(print),
        }
    }

    /// Compile each statement of a block in order.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_block(&mut self, block: &Block<'ast>) -> Result<()> {
        for stmt in block.stmts {
            self.compile(stmt)?;
        }
        Ok(())
    }

    /// Echo the source line and emit `.line` when a statement starts a new
    /// line.
    fn annotate(&mut self, span: Span) {
        if !span.is_known() || !self.emitter.set_line(span.line) {
            return;
        }

        let options = self.ctx.options();
        if options.source_comments
            && let Some(text) = self.ctx.source_line(span.line)
        {
            self.emitter.blank();
            self.emitter.comment(text);
        }
        if options.line_directives {
            self.emitter.emit_line_directive();
        }
    }

    /// Create an expression compiler sharing this compiler's state.
    fn expr_compiler(&mut self) -> ExprCompiler<'_, 'ast> {
        ExprCompiler::new(self.ctx, self.emitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CodegenOptions;
    use bumpalo::Bump;
    use pcl_ast::{AstBuilder, Program};
    use pcl_core::TypeTag;

    fn lower(program: Program<'_>, options: CodegenOptions) -> String {
        let mut ctx = GenerationContext::new(program, options);
        for decl in program.decls {
            ctx.declare(decl);
        }
        let mut emitter = JasminEmitter::new();
        StmtCompiler::new(&mut ctx, &mut emitter)
            .compile_block(&program.body)
            .unwrap();
        emitter.finish().render()
    }

    #[test]
    fn compound_statements_lower_in_order() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let program = b.program(
            "Unit",
            [b.decl("x", TypeTag::Integer)],
            [b.compound([
                b.assign("x", TypeTag::Integer, b.int("1")),
                b.assign("x", TypeTag::Integer, b.int("2")),
            ])],
        );

        assert_eq!(
            lower(program, CodegenOptions::default()),
            "\tldc\t1\n\tputstatic\tUnit/x I\n\tldc\t2\n\tputstatic\tUnit/x I\n"
        );
    }

    #[test]
    fn source_lines_are_echoed_once() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let source = "PROGRAM Unit;\nVAR x : integer;\nBEGIN\n  x := 1; x := 2\nEND.";
        let program = b.program_with_source(
            "Unit",
            source,
            [b.decl("x", TypeTag::Integer)],
            [
                b.at(4, 3).assign("x", TypeTag::Integer, b.int("1")),
                b.at(4, 11).assign("x", TypeTag::Integer, b.int("2")),
            ],
        );

        let text = lower(program, CodegenOptions::default());
        assert_eq!(text.matches("; x := 1; x := 2").count(), 1);
        assert!(text.starts_with("\n; x := 1; x := 2\n\tldc\t1\n"));
        assert!(!text.contains(".line"));
    }

    #[test]
    fn line_directives() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let program = b.program(
            "Unit",
            [b.decl("x", TypeTag::Integer)],
            [
                b.at(2, 1).assign("x", TypeTag::Integer, b.int("1")),
                b.at(3, 1).assign("x", TypeTag::Integer, b.int("2")),
            ],
        );
        let options = CodegenOptions {
            line_directives: true,
            ..CodegenOptions::default()
        };

        let text = lower(program, options);
        assert!(text.starts_with(".line 2\n\tldc\t1\n"));
        assert!(text.contains("\n.line 3\n\tldc\t2\n"));
    }

    #[test]
    fn annotations_can_be_disabled() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let program = b.program_with_source(
            "Unit",
            "x := 1",
            [b.decl("x", TypeTag::Integer)],
            [b.at(1, 1).assign("x", TypeTag::Integer, b.int("1"))],
        );

        let text = lower(program, CodegenOptions::default().without_annotations());
        assert_eq!(text, "\tldc\t1\n\tputstatic\tUnit/x I\n");
    }
}
