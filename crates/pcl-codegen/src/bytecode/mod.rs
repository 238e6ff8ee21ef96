//! Assembly building blocks for the PCL back end.
//!
//! - [`OpCode`] - Jasmin mnemonics emitted by the generator
//! - [`Listing`], [`Line`] and [`Label`] - the structured output
//! - [`descriptor`] - field descriptors and runtime class references

pub mod descriptor;
mod listing;
mod opcode;

pub use descriptor::FieldRef;
pub use listing::{Label, Line, Listing};
pub use opcode::OpCode;
