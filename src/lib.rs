//! PCL
//!
//! Back end of a compiler for PCL, a small Pascal-like teaching language.
//! It takes a syntax tree whose nodes already carry resolved types and
//! produces a Jasmin assembly class for the JVM.
//!
//! The work is split across the workspace:
//!
//! - [`pcl_core`]: spans, type tags, errors and warnings
//! - [`pcl_ast`]: the annotated tree and its arena builder
//! - [`pcl_codegen`]: instruction selection and lowering
//!
//! This crate adds the output stage: writing `<Program>.j` and the fatal
//! exit policy when it cannot be created.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use pcl::ast::{AstBuilder, BinaryOp};
//! use pcl::{CodegenOptions, TypeTag};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let product = b.binary(b.int("6"), BinaryOp::Mul, b.int("7"), TypeTag::Integer);
//! let program = b.program(
//!     "Hello",
//!     [b.decl("n", TypeTag::Integer)],
//!     [
//!         b.assign("n", TypeTag::Integer, product),
//!         b.print("'n = %d\\n'", [b.var("n", TypeTag::Integer)]),
//!     ],
//! );
//!
//! let generated = pcl::compile(&program, &CodegenOptions::default()).unwrap();
//! assert_eq!(generated.file_name, "Hello.j");
//! assert!(generated.text.contains("\timul\n"));
//! ```

mod output;

pub use output::{OUTPUT_UNAVAILABLE_STATUS, compile, write_unit, write_unit_or_exit};

pub use pcl_codegen::{CodeGenerator, CodegenOptions, Generated};
pub use pcl_core::{CodegenError, CodegenWarning, Span, TypeTag};

/// The annotated syntax tree.
pub mod ast {
    pub use pcl_ast::*;
}

/// Lower-level code generation pieces.
pub mod codegen {
    pub use pcl_codegen::*;
}
