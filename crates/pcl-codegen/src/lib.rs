//! PCL Code Generator
//!
//! Lowers a type-annotated PCL syntax tree to Jasmin assembly for the JVM.
//!
//! ## Architecture
//!
//! Generation is a single pass over a tree whose nodes already carry their
//! resolved types. Every choice of instruction or descriptor is a lookup on
//! those types; nothing is inferred.
//!
//! ## Modules
//!
//! - [`bytecode`]: Mnemonics, descriptors and the structured [`Listing`](bytecode::Listing)
//! - [`emit`]: Jasmin emitter with label allocation and stack tracking
//! - [`operators`]: Instruction selection tables for operators
//! - [`context`]: Per-unit symbol table and warnings
//! - [`expr`]: Expression compiler
//! - [`stmt`]: Statement compiler for assignments, control flow and print
//! - [`program`]: Class layout around the program body
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use pcl_ast::{AstBuilder, BinaryOp};
//! use pcl_codegen::{CodeGenerator, CodegenOptions};
//! use pcl_core::TypeTag;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let sum = b.binary(b.int("3"), BinaryOp::Add, b.int("4"), TypeTag::Integer);
//! let program = b.program(
//!     "Test",
//!     [b.decl("x", TypeTag::Integer)],
//!     [b.assign("x", TypeTag::Integer, sum)],
//! );
//!
//! let generated = CodeGenerator::new(CodegenOptions::default())
//!     .generate(&program)
//!     .unwrap();
//! assert!(generated.text.contains("\tiadd\n\tputstatic\tTest/x I\n"));
//! assert!(generated.is_clean());
//! ```

pub mod bytecode;
pub mod context;
pub mod emit;
pub mod expr;
pub mod operators;
mod options;
pub mod program;
pub mod stmt;

pub use context::GenerationContext;
pub use emit::{JasminEmitter, LabelAllocator};
pub use expr::ExprCompiler;
pub use options::CodegenOptions;
pub use program::{CodeGenerator, Generated};
pub use stmt::StmtCompiler;

// Re-export diagnostics from core for convenience
pub use pcl_core::{CodegenError, CodegenWarning};
