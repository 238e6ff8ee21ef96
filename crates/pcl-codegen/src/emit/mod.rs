//! Jasmin emitter for the PCL code generator.
//!
//! The [`JasminEmitter`] provides a high-level API for building an assembly
//! listing: directives, instructions, labels and branches. It tracks the
//! operand stack depth of the method being emitted so the `.limit stack`
//! directive is never smaller than the real peak.
//!
//! # Example
//!
//! ```
//! use pcl_codegen::bytecode::OpCode;
//! use pcl_codegen::emit::JasminEmitter;
//!
//! let mut emitter = JasminEmitter::new();
//! emitter.begin_method("public static main([Ljava/lang/String;)V");
//! emitter.emit_ldc("3");
//! emitter.emit_ldc("4");
//! emitter.emit(OpCode::IAdd);
//! emitter.emit(OpCode::Pop);
//! emitter.emit(OpCode::Return);
//! emitter.end_method(1, 1);
//!
//! let listing = emitter.finish();
//! assert!(listing.render().contains(".limit stack 2"));
//! ```

mod labels;

use std::fmt::Display;

pub use labels::LabelAllocator;

use crate::bytecode::descriptor::method_stack_effect;
use crate::bytecode::{FieldRef, Label, Line, Listing, OpCode};

/// Emits Jasmin lines for one compilation unit.
///
/// One emitter (and therefore one label counter) exists per unit.
#[derive(Debug, Default)]
pub struct JasminEmitter {
    /// Lines emitted so far
    listing: Listing,

    /// Label numbering for this unit
    labels: LabelAllocator,

    /// Operand stack depth at the current point of the current method
    depth: i32,

    /// Largest depth seen in the current method
    peak: i32,

    /// Source line of the construct being emitted
    current_line: u32,
}

impl JasminEmitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, line: Line) {
        log::trace!("{line}");
        self.listing.push(line);
    }

    fn adjust_stack(&mut self, delta: i32) {
        self.depth += delta;
        self.peak = self.peak.max(self.depth);
    }

    // ==========================================================================
    // Directives and layout
    // ==========================================================================

    /// Emit a directive line, e.g. `.field private static x I`.
    pub fn directive(&mut self, text: impl Into<String>) {
        self.push(Line::Directive(text.into()));
    }

    /// Emit a `; text` comment line.
    pub fn comment(&mut self, text: impl Into<String>) {
        self.push(Line::Comment(text.into()));
    }

    /// Emit an empty line.
    pub fn blank(&mut self) {
        self.push(Line::Blank);
    }

    /// Set the source line of the construct being emitted.
    ///
    /// Returns `true` if the line changed.
    pub fn set_line(&mut self, line: u32) -> bool {
        let changed = line != self.current_line;
        self.current_line = line;
        changed
    }

    /// Get the current source line.
    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    /// Emit a `.line` directive for the current source line.
    pub fn emit_line_directive(&mut self) {
        let line = self.current_line;
        self.directive(format!(".line {line}"));
    }

    // ==========================================================================
    // Instructions
    // ==========================================================================

    /// Emit an instruction with no operand.
    pub fn emit(&mut self, op: OpCode) {
        self.adjust_stack(op.stack_effect().unwrap_or(0));
        self.push(Line::Instruction { op, operand: None });
    }

    /// Emit an instruction with an operand.
    pub fn emit_with(&mut self, op: OpCode, operand: impl Display) {
        self.adjust_stack(op.stack_effect().unwrap_or(0));
        self.push(Line::Instruction {
            op,
            operand: Some(operand.to_string()),
        });
    }

    /// Emit `ldc` with a constant in source form, passed through verbatim.
    pub fn emit_ldc(&mut self, text: &str) {
        self.emit_with(OpCode::Ldc, text);
    }

    /// Emit `ldc` for a non-negative integer (array sizes and indexes).
    pub fn emit_int(&mut self, value: usize) {
        self.emit_with(OpCode::Ldc, value);
    }

    /// Emit `ldc` for a string constant.
    ///
    /// The value is wrapped in double quotes and otherwise written as is, so
    /// escapes such as `\n` reach the assembler unchanged.
    pub fn emit_string(&mut self, value: &str) {
        self.emit_with(OpCode::Ldc, format_args!("\"{value}\""));
    }

    /// Emit `getstatic`.
    pub fn emit_get_static(&mut self, field: FieldRef<'_>) {
        self.emit_with(OpCode::GetStatic, field);
    }

    /// Emit `putstatic`.
    pub fn emit_put_static(&mut self, field: FieldRef<'_>) {
        self.emit_with(OpCode::PutStatic, field);
    }

    /// Emit `new <class>`.
    pub fn emit_new(&mut self, class: &str) {
        self.emit_with(OpCode::New, class);
    }

    /// Emit a method invocation.
    ///
    /// `method` carries its descriptor, which determines the stack effect.
    pub fn emit_invoke(&mut self, op: OpCode, method: &str) {
        let has_receiver = op != OpCode::InvokeStatic;
        self.adjust_stack(method_stack_effect(method, has_receiver));
        self.push(Line::Instruction {
            op,
            operand: Some(method.to_string()),
        });
    }

    // ==========================================================================
    // Labels and branches
    // ==========================================================================

    /// Allocate a fresh label.
    pub fn new_label(&mut self) -> Label {
        self.labels.allocate()
    }

    /// Place `label` at the current position.
    pub fn define_label(&mut self, label: Label) {
        let fresh = self.labels.mark_defined(label);
        debug_assert!(fresh, "{label} defined twice");
        self.push(Line::Label(label));
    }

    /// Emit a branch to `target`.
    pub fn emit_branch(&mut self, op: OpCode, target: Label) {
        debug_assert!(op.is_branch(), "{op:?} is not a branch");
        self.adjust_stack(op.stack_effect().unwrap_or(0));
        self.push(Line::Branch { op, target });
    }

    /// Emit `goto target`.
    pub fn emit_goto(&mut self, target: Label) {
        self.emit_branch(OpCode::Goto, target);
    }

    /// Number of labels allocated in this unit.
    pub fn labels_allocated(&self) -> u32 {
        self.labels.allocated()
    }

    // ==========================================================================
    // Methods
    // ==========================================================================

    /// Start a method block: `.method <header>` and a blank line.
    ///
    /// Resets stack tracking.
    pub fn begin_method(&mut self, header: &str) {
        self.depth = 0;
        self.peak = 0;
        self.directive(format!(".method {header}"));
        self.blank();
    }

    /// Close a method block with its capacity directives.
    ///
    /// The stack limit is `stack_limit`, raised to the measured peak if that
    /// is larger.
    pub fn end_method(&mut self, locals_limit: u32, stack_limit: u32) {
        let stack = stack_limit.max(self.peak_stack());
        self.blank();
        self.directive(format!(".limit locals {locals_limit}"));
        self.directive(format!(".limit stack {stack}"));
        self.directive(".end method");
    }

    /// Current operand stack depth.
    pub fn stack_depth(&self) -> i32 {
        self.depth
    }

    /// Peak operand stack depth of the current method.
    pub fn peak_stack(&self) -> u32 {
        self.peak.max(0) as u32
    }

    // ==========================================================================
    // Finalization
    // ==========================================================================

    /// Lines emitted so far.
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Finish and return the listing.
    pub fn finish(self) -> Listing {
        self.listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_constant() {
        let mut emitter = JasminEmitter::new();
        emitter.emit_ldc("3.14");
        let listing = emitter.finish();

        assert_eq!(listing.render(), "\tldc\t3.14\n");
    }

    #[test]
    fn string_constants_are_quoted_verbatim() {
        let mut emitter = JasminEmitter::new();
        emitter.emit_string(r"x = %d\n");

        assert_eq!(emitter.finish().render(), "\tldc\t\"x = %d\\n\"\n");
    }

    #[test]
    fn field_access() {
        let mut emitter = JasminEmitter::new();
        let field = FieldRef {
            owner: "Test",
            name: "x",
            descriptor: "I",
        };
        emitter.emit_get_static(field);
        emitter.emit_put_static(field);

        assert_eq!(
            emitter.finish().render(),
            "\tgetstatic\tTest/x I\n\tputstatic\tTest/x I\n"
        );
    }

    #[test]
    fn stack_tracking() {
        let mut emitter = JasminEmitter::new();
        emitter.begin_method("public static main([Ljava/lang/String;)V");
        emitter.emit_ldc("1");
        emitter.emit_ldc("2");
        emitter.emit_ldc("3");
        assert_eq!(emitter.stack_depth(), 3);

        emitter.emit(OpCode::IAdd);
        emitter.emit(OpCode::IAdd);
        assert_eq!(emitter.stack_depth(), 1);
        assert_eq!(emitter.peak_stack(), 3);

        emitter.emit_invoke(
            OpCode::InvokeStatic,
            "java/lang/Integer.valueOf(I)Ljava/lang/Integer;",
        );
        assert_eq!(emitter.stack_depth(), 1);
    }

    #[test]
    fn begin_method_resets_stack() {
        let mut emitter = JasminEmitter::new();
        emitter.begin_method("public <init>()V");
        emitter.emit_ldc("1");
        emitter.emit_ldc("2");
        emitter.begin_method("public static main([Ljava/lang/String;)V");

        assert_eq!(emitter.stack_depth(), 0);
        assert_eq!(emitter.peak_stack(), 0);
    }

    #[test]
    fn limit_is_raised_to_peak() {
        let mut emitter = JasminEmitter::new();
        emitter.begin_method("public static f()V");
        for _ in 0..20 {
            emitter.emit_ldc("0");
        }
        emitter.end_method(16, 16);

        let text = emitter.finish().render();
        assert!(text.contains(".limit locals 16\n"));
        assert!(text.contains(".limit stack 20\n"));
        assert!(text.ends_with(".end method\n"));
    }

    #[test]
    fn limit_keeps_configured_minimum() {
        let mut emitter = JasminEmitter::new();
        emitter.begin_method("public static f()V");
        emitter.emit_ldc("0");
        emitter.end_method(16, 16);

        assert!(emitter.finish().render().contains(".limit stack 16\n"));
    }

    #[test]
    fn labels_and_branches() {
        let mut emitter = JasminEmitter::new();
        let top = emitter.new_label();
        let end = emitter.new_label();

        emitter.define_label(top);
        emitter.emit_goto(end);
        emitter.define_label(end);

        assert_eq!(emitter.labels_allocated(), 2);
        let listing = emitter.finish();
        assert_eq!(listing.render(), "Label_0:\n\tgoto Label_1\nLabel_1:\n");
        assert!(listing.label_violations().is_empty());
    }

    #[test]
    fn line_tracking() {
        let mut emitter = JasminEmitter::new();
        assert!(emitter.set_line(3));
        assert!(!emitter.set_line(3));
        assert_eq!(emitter.current_line(), 3);

        emitter.emit_line_directive();
        assert_eq!(emitter.finish().render(), ".line 3\n");
    }
}
