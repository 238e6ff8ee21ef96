//! Print statement compilation.
//!
//! `print` calls `System.out.printf` with the format literal and an
//! `Object[]` holding each argument boxed as `Integer` or `Float`.

use pcl_ast::PrintStmt;
use pcl_core::{CodegenError, CodegenWarning, Span, TypeTag};

use super::{Result, StmtCompiler};
use crate::bytecode::OpCode;
use crate::bytecode::descriptor::{OBJECT_CLASS, PRINTF, SYSTEM_OUT, boxing_method};

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Compile a print statement.
    ///
    /// The number of arguments is not checked against the format's
    /// placeholders.
    ///
    /// Layout, for `k` arguments:
    /// ```text
    /// getstatic System/out
    /// ldc "<format>"
    /// ldc k
    /// anewarray java/lang/Object
    /// (per argument i)
    ///   dup
    ///   ldc i
    ///   [argument]
    ///   invokestatic Integer.valueOf | Float.valueOf
    ///   aastore
    /// invokevirtual PrintStream.printf
    /// pop
    /// ```
    pub fn compile_print(&mut self, print: &PrintStmt<'ast>) -> Result<()> {
        log::debug!(
            "print at {} with {} argument(s)",
            print.span,
            print.args.len()
        );

        let format = format_text(print.format, print.span)?;

        self.emitter.emit_with(OpCode::GetStatic, SYSTEM_OUT);
        self.emitter.emit_string(format);
        self.emitter.emit_int(print.args.len());
        self.emitter.emit_with(OpCode::ANewArray, OBJECT_CLASS);

        for (index, arg) in print.args.iter().enumerate() {
            self.emitter.emit(OpCode::Dup);
            self.emitter.emit_int(index);
            self.expr_compiler().compile(arg)?;

            let ty = arg.ty();
            if ty == TypeTag::Unknown {
                self.ctx.warn(CodegenWarning::UnknownPrintArgument {
                    index,
                    span: arg.span(),
                });
            }
            self.emitter.emit_invoke(OpCode::InvokeStatic, boxing_method(ty));
            self.emitter.emit(OpCode::AAStore);
        }

        self.emitter.emit_invoke(OpCode::InvokeVirtual, PRINTF);
        self.emitter.emit(OpCode::Pop);
        Ok(())
    }
}

/// The text of a quoted format literal, without its enclosing single quotes.
///
/// Nothing inside the quotes is rewritten.
fn format_text(literal: &str, span: Span) -> Result<&str> {
    literal
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or_else(|| CodegenError::MalformedFormatLiteral {
            literal: literal.to_string(),
            span,
        })
}
