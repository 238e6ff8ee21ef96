//! Error and diagnostic types for code generation.
//!
//! Two regimes exist:
//!
//! ```text
//! CodegenError    - generation stops (malformed tree, unwritable output)
//! CodegenWarning  - generation continues with a placeholder token in the
//!                   output; the warning says why the assembler will reject it
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{Span, TypeTag};

// ============================================================================
// Errors
// ============================================================================

/// Errors that stop code generation.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A relational expression appeared where a value was expected.
    ///
    /// Comparisons lower to conditional branches, so they are only valid as
    /// the condition of an `if` or a loop.
    #[error("at {span}: comparison '{op}' used outside of a condition")]
    ComparisonOutsideCondition {
        /// The comparison operator.
        op: String,
        /// Where the comparison occurred.
        span: Span,
    },

    /// A condition was not a relational expression.
    #[error("at {span}: condition is not a comparison")]
    NonRelationalCondition {
        /// Where the condition occurred.
        span: Span,
    },

    /// A print format literal was not wrapped in single quotes.
    #[error("at {span}: malformed format literal {literal}")]
    MalformedFormatLiteral {
        /// The literal as it appeared in the tree.
        literal: String,
        /// Where the literal occurred.
        span: Span,
    },

    /// Code generation options could not be read.
    #[error("invalid code generation options: {message}")]
    InvalidOptions {
        /// Description of the problem.
        message: String,
    },

    /// The assembly file could not be created.
    #[error("cannot open assembly file {}: {source}", path.display())]
    OutputUnavailable {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to an already opened assembly file failed.
    #[error("failed to write assembly: {0}")]
    Io(#[from] io::Error),
}

impl CodegenError {
    /// Get the span where this error occurred.
    ///
    /// Errors that are not tied to a tree node return `Span::default()`.
    pub fn span(&self) -> Span {
        match self {
            CodegenError::ComparisonOutsideCondition { span, .. } => *span,
            CodegenError::NonRelationalCondition { span } => *span,
            CodegenError::MalformedFormatLiteral { span, .. } => *span,
            CodegenError::InvalidOptions { .. }
            | CodegenError::OutputUnavailable { .. }
            | CodegenError::Io(_) => Span::default(),
        }
    }

    /// Whether this is the unrecoverable "cannot open output" failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CodegenError::OutputUnavailable { .. })
    }
}

// ============================================================================
// Warnings
// ============================================================================

/// A construct that was emitted with a placeholder instead of a real
/// instruction or descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenWarning {
    /// No arithmetic instruction exists for the operand pair.
    #[error("at {span}: no instruction for '{op}' on {left} and {right}")]
    UnresolvedOperator {
        /// The operator.
        op: String,
        /// The left operand type.
        left: TypeTag,
        /// The right operand type.
        right: TypeTag,
        /// Where the operation occurred.
        span: Span,
    },

    /// No conditional branch exists for the operand pair.
    #[error("at {span}: cannot compare {left} with {right} using '{op}'")]
    UnresolvedComparison {
        /// The comparison operator.
        op: String,
        /// The left operand type.
        left: TypeTag,
        /// The right operand type.
        right: TypeTag,
        /// Where the comparison occurred.
        span: Span,
    },

    /// Negation of a non-numeric operand.
    #[error("at {span}: cannot negate a value of type {operand}")]
    UnresolvedNegation {
        /// The operand type.
        operand: TypeTag,
        /// Where the negation occurred.
        span: Span,
    },

    /// A variable whose type has no field descriptor.
    #[error("at {span}: variable '{name}' has no storage descriptor")]
    UnknownDescriptor {
        /// The variable name.
        name: String,
        /// Where the variable was declared or used.
        span: Span,
    },

    /// An assignment whose value type differs from the target type.
    #[error("at {span}: cannot store {value} into '{name}' of type {target}")]
    AssignmentTypeMismatch {
        /// The target variable.
        name: String,
        /// The declared type of the target.
        target: TypeTag,
        /// The type of the assigned value.
        value: TypeTag,
        /// Where the assignment occurred.
        span: Span,
    },

    /// A variable reference with no matching declaration.
    #[error("at {span}: variable '{name}' was never declared")]
    UndeclaredVariable {
        /// The variable name.
        name: String,
        /// Where the variable was used.
        span: Span,
    },

    /// A reference annotated with a type other than the declared one.
    #[error("at {span}: '{name}' is declared {declared} but annotated {annotated}")]
    AnnotationMismatch {
        /// The variable name.
        name: String,
        /// The type from the declaration.
        declared: TypeTag,
        /// The type on the reference node.
        annotated: TypeTag,
        /// Where the variable was used.
        span: Span,
    },

    /// A variable declared more than once.
    #[error("at {span}: variable '{name}' is declared more than once")]
    DuplicateDeclaration {
        /// The variable name.
        name: String,
        /// Where the repeated declaration occurred.
        span: Span,
    },

    /// A print argument with no numeric type, boxed as a float.
    #[error("at {span}: print argument {index} has unknown type")]
    UnknownPrintArgument {
        /// Zero-based argument position.
        index: usize,
        /// Where the argument occurred.
        span: Span,
    },
}

impl CodegenWarning {
    /// Get the span where this warning occurred.
    pub fn span(&self) -> Span {
        match self {
            CodegenWarning::UnresolvedOperator { span, .. } => *span,
            CodegenWarning::UnresolvedComparison { span, .. } => *span,
            CodegenWarning::UnresolvedNegation { span, .. } => *span,
            CodegenWarning::UnknownDescriptor { span, .. } => *span,
            CodegenWarning::AssignmentTypeMismatch { span, .. } => *span,
            CodegenWarning::UndeclaredVariable { span, .. } => *span,
            CodegenWarning::AnnotationMismatch { span, .. } => *span,
            CodegenWarning::DuplicateDeclaration { span, .. } => *span,
            CodegenWarning::UnknownPrintArgument { span, .. } => *span,
        }
    }
}
