//! PCL Core
//!
//! Types shared by every stage of the PCL compiler back end:
//!
//! - [`Span`]: source positions attached to tree nodes
//! - [`TypeTag`]: the resolved type a semantic pass attaches to each node
//! - [`CodegenError`] and [`CodegenWarning`]: hard failures and the
//!   degraded-output diagnostics recorded next to placeholder instructions

mod error;
mod span;
mod type_tag;

pub use error::{CodegenError, CodegenWarning};
pub use span::Span;
pub use type_tag::TypeTag;
