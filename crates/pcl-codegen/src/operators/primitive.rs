//! Instruction tables for the numeric types.
//!
//! Selection is purely by operand types: both sides must carry the same
//! numeric type. There is no promotion, so mixed integer/real operands have
//! no instruction.

use pcl_ast::BinaryOp;
use pcl_core::TypeTag;

use super::ComparisonBranch;
use crate::bytecode::OpCode;

/// Try to select the instruction for a binary arithmetic operator.
///
/// Returns `None` for mixed or non-numeric operands and for relational
/// operators.
pub fn try_arithmetic(op: BinaryOp, left: TypeTag, right: TypeTag) -> Option<OpCode> {
    match (left.common_numeric(right)?, op) {
        (TypeTag::Integer, BinaryOp::Add) => Some(OpCode::IAdd),
        (TypeTag::Integer, BinaryOp::Sub) => Some(OpCode::ISub),
        (TypeTag::Integer, BinaryOp::Mul) => Some(OpCode::IMul),
        (TypeTag::Integer, BinaryOp::Div) => Some(OpCode::IDiv),

        (TypeTag::Real, BinaryOp::Add) => Some(OpCode::FAdd),
        (TypeTag::Real, BinaryOp::Sub) => Some(OpCode::FSub),
        (TypeTag::Real, BinaryOp::Mul) => Some(OpCode::FMul),
        (TypeTag::Real, BinaryOp::Div) => Some(OpCode::FDiv),

        _ => None,
    }
}

/// Try to select the negation instruction for an operand type.
pub fn try_negation(operand: TypeTag) -> Option<OpCode> {
    match operand {
        TypeTag::Integer => Some(OpCode::INeg),
        TypeTag::Real => Some(OpCode::FNeg),
        TypeTag::Unknown => None,
    }
}

/// Try to select the conditional branch for a relational operator.
///
/// Integers compare and branch in one instruction. Reals compare first,
/// leaving -1, 0 or 1, then branch on that result. `fcmpg` is used for `<`
/// and `<=` so that a NaN operand makes the comparison false.
pub fn try_comparison(op: BinaryOp, left: TypeTag, right: TypeTag) -> Option<ComparisonBranch> {
    match left.common_numeric(right)? {
        TypeTag::Integer => integer_branch(op).map(ComparisonBranch::Direct),
        TypeTag::Real => {
            let branch = zero_branch(op)?;
            let compare = match op {
                BinaryOp::Less | BinaryOp::LessEqual => OpCode::FCmpG,
                _ => OpCode::FCmpL,
            };
            Some(ComparisonBranch::ViaCompare { compare, branch })
        }
        TypeTag::Unknown => None,
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn integer_branch(op: BinaryOp) -> Option<OpCode> {
    match op {
        BinaryOp::Greater => Some(OpCode::IfICmpGt),
        BinaryOp::Less => Some(OpCode::IfICmpLt),
        BinaryOp::GreaterEqual => Some(OpCode::IfICmpGe),
        BinaryOp::LessEqual => Some(OpCode::IfICmpLe),
        BinaryOp::Equal => Some(OpCode::IfICmpEq),
        BinaryOp::NotEqual => Some(OpCode::IfICmpNe),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => None,
    }
}

/// Branch on the result of `fcmpl`/`fcmpg` against zero.
fn zero_branch(op: BinaryOp) -> Option<OpCode> {
    match op {
        BinaryOp::Greater => Some(OpCode::IfGt),
        BinaryOp::Less => Some(OpCode::IfLt),
        BinaryOp::GreaterEqual => Some(OpCode::IfGe),
        BinaryOp::LessEqual => Some(OpCode::IfLe),
        BinaryOp::Equal => Some(OpCode::IfEq),
        BinaryOp::NotEqual => Some(OpCode::IfNe),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic() {
        let int = TypeTag::Integer;
        assert_eq!(try_arithmetic(BinaryOp::Add, int, int), Some(OpCode::IAdd));
        assert_eq!(try_arithmetic(BinaryOp::Sub, int, int), Some(OpCode::ISub));
        assert_eq!(try_arithmetic(BinaryOp::Mul, int, int), Some(OpCode::IMul));
        assert_eq!(try_arithmetic(BinaryOp::Div, int, int), Some(OpCode::IDiv));
    }

    #[test]
    fn real_arithmetic() {
        let real = TypeTag::Real;
        let expected = [
            (BinaryOp::Add, OpCode::FAdd),
            (BinaryOp::Sub, OpCode::FSub),
            (BinaryOp::Mul, OpCode::FMul),
            (BinaryOp::Div, OpCode::FDiv),
        ];
        for (op, instruction) in expected {
            assert_eq!(try_arithmetic(op, real, real), Some(instruction), "{op}");
        }
    }

    #[test]
    fn mixed_operands_have_no_instruction() {
        let (int, real, unknown) = (TypeTag::Integer, TypeTag::Real, TypeTag::Unknown);
        assert_eq!(try_arithmetic(BinaryOp::Add, int, real), None);
        assert_eq!(try_arithmetic(BinaryOp::Mul, real, int), None);
        assert_eq!(try_arithmetic(BinaryOp::Sub, unknown, unknown), None);
        assert_eq!(try_comparison(BinaryOp::Less, int, real), None);
    }

    #[test]
    fn relational_operators_are_not_arithmetic() {
        let (int, real) = (TypeTag::Integer, TypeTag::Real);
        assert_eq!(try_arithmetic(BinaryOp::Greater, int, int), None);
        assert_eq!(try_comparison(BinaryOp::Add, int, int), None);
        assert_eq!(try_comparison(BinaryOp::Div, real, real), None);
    }

    #[test]
    fn negation() {
        assert_eq!(try_negation(TypeTag::Integer), Some(OpCode::INeg));
        assert_eq!(try_negation(TypeTag::Real), Some(OpCode::FNeg));
        assert_eq!(try_negation(TypeTag::Unknown), None);
    }

    #[test]
    fn integer_comparisons_branch_directly() {
        let int = TypeTag::Integer;
        let expected = [
            (BinaryOp::Greater, OpCode::IfICmpGt),
            (BinaryOp::Less, OpCode::IfICmpLt),
            (BinaryOp::GreaterEqual, OpCode::IfICmpGe),
            (BinaryOp::LessEqual, OpCode::IfICmpLe),
            (BinaryOp::Equal, OpCode::IfICmpEq),
            (BinaryOp::NotEqual, OpCode::IfICmpNe),
        ];
        for (op, branch) in expected {
            assert_eq!(
                try_comparison(op, int, int),
                Some(ComparisonBranch::Direct(branch)),
                "{op}"
            );
        }
    }

    #[test]
    fn real_comparisons_compare_then_branch() {
        let real = TypeTag::Real;
        let expected = [
            (BinaryOp::Greater, OpCode::FCmpL, OpCode::IfGt),
            (BinaryOp::Less, OpCode::FCmpG, OpCode::IfLt),
            (BinaryOp::GreaterEqual, OpCode::FCmpL, OpCode::IfGe),
            (BinaryOp::LessEqual, OpCode::FCmpG, OpCode::IfLe),
            (BinaryOp::Equal, OpCode::FCmpL, OpCode::IfEq),
            (BinaryOp::NotEqual, OpCode::FCmpL, OpCode::IfNe),
        ];
        for (op, compare, branch) in expected {
            assert_eq!(
                try_comparison(op, real, real),
                Some(ComparisonBranch::ViaCompare { compare, branch }),
                "{op}"
            );
        }
    }
}
