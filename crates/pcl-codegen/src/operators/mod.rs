//! Operator resolution for expression compilation.
//!
//! The `try_*` functions in [`primitive`] answer whether a real instruction
//! exists for an operator and its operand types. The `resolve_*` functions
//! here are total: when no instruction exists they return the placeholder
//! opcode, and the caller records a warning.

mod primitive;

pub use primitive::{try_arithmetic, try_comparison, try_negation};

use pcl_ast::BinaryOp;
use pcl_core::TypeTag;

use crate::bytecode::OpCode;

/// How a relational operator branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonBranch {
    /// A single compare-and-branch instruction.
    Direct(OpCode),
    /// A compare instruction leaving -1/0/1, then a branch on that value.
    ViaCompare {
        /// `fcmpl` or `fcmpg`.
        compare: OpCode,
        /// Branch against zero.
        branch: OpCode,
    },
}

impl ComparisonBranch {
    /// The instruction that jumps to the target.
    pub fn branch(&self) -> OpCode {
        match self {
            ComparisonBranch::Direct(branch) => *branch,
            ComparisonBranch::ViaCompare { branch, .. } => *branch,
        }
    }

    /// Whether the branch is the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.branch().is_placeholder()
    }
}

/// Arithmetic instruction for `op`, or [`OpCode::Unresolved`].
pub fn resolve_arithmetic(op: BinaryOp, left: TypeTag, right: TypeTag) -> OpCode {
    try_arithmetic(op, left, right)
        .unwrap_or(OpCode::Unresolved)
}

/// Negation instruction for `operand`, or [`OpCode::UnresolvedNeg`].
pub fn resolve_negation(operand: TypeTag) -> OpCode {
    try_negation(operand).unwrap_or(OpCode::UnresolvedNeg)
}

/// Branch sequence for `op`, or a direct [`OpCode::UnresolvedBranch`].
pub fn resolve_comparison(op: BinaryOp, left: TypeTag, right: TypeTag) -> ComparisonBranch {
    try_comparison(op, left, right)
        .unwrap_or(ComparisonBranch::Direct(OpCode::UnresolvedBranch))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPES: [TypeTag; 3] = [TypeTag::Integer, TypeTag::Real, TypeTag::Unknown];

    #[test]
    fn arithmetic_table_is_total() {
        for op in BinaryOp::ALL.into_iter().filter(BinaryOp::is_arithmetic) {
            for left in TYPES {
                for right in TYPES {
                    let selected = resolve_arithmetic(op, left, right);
                    let valid = left == right && left.is_numeric();
                    assert_eq!(!selected.is_placeholder(), valid, "{op} {left} {right}");
                    assert_eq!(selected, resolve_arithmetic(op, left, right));
                }
            }
        }
    }

    #[test]
    fn comparison_table_is_total() {
        for op in BinaryOp::ALL.into_iter().filter(BinaryOp::is_comparison) {
            for left in TYPES {
                for right in TYPES {
                    let selected = resolve_comparison(op, left, right);
                    let valid = left == right && left.is_numeric();
                    assert_eq!(!selected.is_placeholder(), valid, "{op} {left} {right}");
                    assert!(selected.branch().is_branch());
                }
            }
        }
    }

    #[test]
    fn placeholders() {
        assert_eq!(
            resolve_arithmetic(BinaryOp::Add, TypeTag::Integer, TypeTag::Real),
            OpCode::Unresolved
        );
        assert_eq!(resolve_negation(TypeTag::Unknown), OpCode::UnresolvedNeg);
        assert_eq!(
            resolve_comparison(BinaryOp::Less, TypeTag::Real, TypeTag::Integer),
            ComparisonBranch::Direct(OpCode::UnresolvedBranch)
        );
    }
}
