//! Type-annotated syntax tree for PCL.
//!
//! The tree is produced by an external front end and semantic pass; every
//! expression already carries its resolved [`TypeTag`](pcl_core::TypeTag).
//! Nodes are allocated in a [`bumpalo::Bump`] arena and borrow from it for
//! `'ast`.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use pcl_ast::{AstBuilder, BinaryOp};
//! use pcl_core::TypeTag;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//!
//! // x: integer; x := 3 + 4;
//! let sum = b.binary(b.int("3"), BinaryOp::Add, b.int("4"), TypeTag::Integer);
//! let program = b.program(
//!     "Test",
//!     [b.decl("x", TypeTag::Integer)],
//!     [b.assign("x", TypeTag::Integer, sum)],
//! );
//! assert_eq!(program.decls.len(), 1);
//! ```

mod builder;
pub mod decl;
pub mod expr;
pub mod ops;
pub mod stmt;

pub use builder::AstBuilder;
pub use decl::*;
pub use expr::*;
pub use ops::*;
pub use stmt::*;
