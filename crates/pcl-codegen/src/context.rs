//! Per-unit generation state.
//!
//! The [`GenerationContext`] owns everything the expression and statement
//! compilers share for one compilation unit: the declared-variable table,
//! the recorded warnings and the options. A fresh context is built for every
//! unit, so nothing carries over between runs.

use pcl_ast::{IdentExpr, Program, VarDecl};
use pcl_core::{CodegenWarning, Span, TypeTag};
use rustc_hash::FxHashMap;

use crate::bytecode::FieldRef;
use crate::bytecode::descriptor::{PLACEHOLDER_DESCRIPTOR, field_descriptor};
use crate::options::CodegenOptions;

/// How a variable is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Storage {
    /// The type the field was declared with, or the reference's own type for
    /// undeclared names.
    pub ty: TypeTag,
    /// The field descriptor, `?` when the type has none.
    pub descriptor: &'static str,
}

/// Shared state for generating one compilation unit.
pub struct GenerationContext<'ast> {
    /// The unit being generated
    program: Program<'ast>,
    /// Generation settings
    options: CodegenOptions,
    /// Declared type of each variable, first declaration wins
    symbols: FxHashMap<&'ast str, TypeTag>,
    /// Placeholder diagnostics, in emission order
    warnings: Vec<CodegenWarning>,
}

impl<'ast> GenerationContext<'ast> {
    /// Create the context for `program`.
    pub fn new(program: Program<'ast>, options: CodegenOptions) -> Self {
        Self {
            program,
            options,
            symbols: FxHashMap::default(),
            warnings: Vec::new(),
        }
    }

    /// Name of the generated class.
    pub fn class_name(&self) -> &'ast str {
        self.program.name
    }

    /// The unit being generated.
    pub fn program(&self) -> Program<'ast> {
        self.program
    }

    /// Generation settings.
    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Trimmed source text of a line, when the program carries its source.
    pub fn source_line(&self, line: u32) -> Option<&'ast str> {
        self.program.source_line(line)
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    /// Record a declaration.
    ///
    /// Returns the previously declared type if `decl` repeats a name; the
    /// first declaration stays in effect.
    pub fn declare(&mut self, decl: &VarDecl<'ast>) -> Option<TypeTag> {
        match self.symbols.get(decl.name) {
            Some(&previous) => Some(previous),
            None => {
                self.symbols.insert(decl.name, decl.ty);
                None
            }
        }
    }

    /// Declared type of `name`.
    pub fn declared_type(&self, name: &str) -> Option<TypeTag> {
        self.symbols.get(name).copied()
    }

    /// Resolve the storage of a referenced variable.
    ///
    /// Declared variables always use their declared type, so loads and
    /// stores of one variable agree. A reference annotated differently
    /// records [`CodegenWarning::AnnotationMismatch`]; an undeclared name
    /// falls back to the reference's own type and records
    /// [`CodegenWarning::UndeclaredVariable`].
    pub fn resolve_variable(&mut self, ident: &IdentExpr<'ast>) -> Storage {
        let ty = match self.declared_type(ident.name) {
            Some(declared) => {
                if declared != ident.ty {
                    self.warn(CodegenWarning::AnnotationMismatch {
                        name: ident.name.to_string(),
                        declared,
                        annotated: ident.ty,
                        span: ident.span,
                    });
                }
                declared
            }
            None => {
                self.warn(CodegenWarning::UndeclaredVariable {
                    name: ident.name.to_string(),
                    span: ident.span,
                });
                ident.ty
            }
        };

        Storage {
            ty,
            descriptor: self.descriptor_for(ident.name, ty, ident.span),
        }
    }

    /// Field descriptor for `ty`, or the placeholder with a warning.
    pub fn descriptor_for(&mut self, name: &str, ty: TypeTag, span: Span) -> &'static str {
        field_descriptor(ty).unwrap_or_else(|| {
            self.warn(CodegenWarning::UnknownDescriptor {
                name: name.to_string(),
                span,
            });
            PLACEHOLDER_DESCRIPTOR
        })
    }

    /// A static field of the generated class.
    pub fn field<'f>(&self, name: &'f str, descriptor: &'f str) -> FieldRef<'f>
    where
        'ast: 'f,
    {
        FieldRef {
            owner: self.program.name,
            name,
            descriptor,
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Record a warning.
    pub fn warn(&mut self, warning: CodegenWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[CodegenWarning] {
        &self.warnings
    }

    /// Consume the context, returning its warnings.
    pub fn into_warnings(self) -> Vec<CodegenWarning> {
        self.warnings
    }
}
