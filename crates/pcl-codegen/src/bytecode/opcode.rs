//! Jasmin instruction mnemonics.
//!
//! This module defines the subset of the JVM instruction set the generator
//! emits, together with the placeholder tokens written when type-directed
//! selection finds no valid instruction.

/// Instruction mnemonics.
///
/// The target is a stack machine: operands are popped from the operand stack
/// and results pushed back. [`stack_effect`](Self::stack_effect) records the
/// net change for every fixed-shape instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    // =========================================================================
    // Constants and static fields
    // =========================================================================
    /// Push a constant (integer, float or string).
    /// Operand: the constant in source form
    Ldc,
    /// Push a static field.
    /// Operand: `<class>/<field> <descriptor>`
    GetStatic,
    /// Pop into a static field.
    /// Operand: `<class>/<field> <descriptor>`
    PutStatic,

    // =========================================================================
    // Integer arithmetic
    // =========================================================================
    /// Add two ints.
    IAdd,
    /// Subtract two ints.
    ISub,
    /// Multiply two ints.
    IMul,
    /// Divide two ints.
    IDiv,
    /// Negate an int.
    INeg,

    // =========================================================================
    // Float arithmetic
    // =========================================================================
    /// Add two floats.
    FAdd,
    /// Subtract two floats.
    FSub,
    /// Multiply two floats.
    FMul,
    /// Divide two floats.
    FDiv,
    /// Negate a float.
    FNeg,

    // =========================================================================
    // Comparison and branches
    // =========================================================================
    /// Branch if int1 > int2.
    IfICmpGt,
    /// Branch if int1 < int2.
    IfICmpLt,
    /// Branch if int1 >= int2.
    IfICmpGe,
    /// Branch if int1 <= int2.
    IfICmpLe,
    /// Branch if int1 == int2.
    IfICmpEq,
    /// Branch if int1 != int2.
    IfICmpNe,
    /// Compare two floats, NaN yields -1.
    FCmpL,
    /// Compare two floats, NaN yields 1.
    FCmpG,
    /// Branch if int > 0.
    IfGt,
    /// Branch if int < 0.
    IfLt,
    /// Branch if int >= 0.
    IfGe,
    /// Branch if int <= 0.
    IfLe,
    /// Branch if int == 0.
    IfEq,
    /// Branch if int != 0.
    IfNe,
    /// Unconditional branch.
    Goto,

    // =========================================================================
    // Objects, arrays and calls
    // =========================================================================
    /// Allocate an uninitialized object.
    /// Operand: class name
    New,
    /// Duplicate top of stack.
    Dup,
    /// Discard top of stack.
    Pop,
    /// Push local 0 (`this` in an instance method).
    ALoad0,
    /// Call a constructor or private method.
    /// Operand: method reference with descriptor
    InvokeNonVirtual,
    /// Call an instance method.
    /// Operand: method reference with descriptor
    InvokeVirtual,
    /// Call a static method.
    /// Operand: method reference with descriptor
    InvokeStatic,
    /// Allocate an array of references; pops the length.
    /// Operand: element class name
    ANewArray,
    /// Store a reference into an array; pops array, index and value.
    AAStore,
    /// Return from a void method.
    Return,

    // =========================================================================
    // Placeholders
    // =========================================================================
    /// Stands in for a binary arithmetic instruction with no valid selection.
    Unresolved,
    /// Stands in for a conditional branch with no valid selection.
    UnresolvedBranch,
    /// Stands in for a negation with no valid selection.
    UnresolvedNeg,
}

impl OpCode {
    /// The assembler spelling.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            OpCode::Ldc => "ldc",
            OpCode::GetStatic => "getstatic",
            OpCode::PutStatic => "putstatic",
            OpCode::IAdd => "iadd",
            OpCode::ISub => "isub",
            OpCode::IMul => "imul",
            OpCode::IDiv => "idiv",
            OpCode::INeg => "ineg",
            OpCode::FAdd => "fadd",
            OpCode::FSub => "fsub",
            OpCode::FMul => "fmul",
            OpCode::FDiv => "fdiv",
            OpCode::FNeg => "fneg",
            OpCode::IfICmpGt => "if_icmpgt",
            OpCode::IfICmpLt => "if_icmplt",
            OpCode::IfICmpGe => "if_icmpge",
            OpCode::IfICmpLe => "if_icmple",
            OpCode::IfICmpEq => "if_icmpeq",
            OpCode::IfICmpNe => "if_icmpne",
            OpCode::FCmpL => "fcmpl",
            OpCode::FCmpG => "fcmpg",
            OpCode::IfGt => "ifgt",
            OpCode::IfLt => "iflt",
            OpCode::IfGe => "ifge",
            OpCode::IfLe => "ifle",
            OpCode::IfEq => "ifeq",
            OpCode::IfNe => "ifne",
            OpCode::Goto => "goto",
            OpCode::New => "new",
            OpCode::Dup => "dup",
            OpCode::Pop => "pop",
            OpCode::ALoad0 => "aload_0",
            OpCode::InvokeNonVirtual => "invokenonvirtual",
            OpCode::InvokeVirtual => "invokevirtual",
            OpCode::InvokeStatic => "invokestatic",
            OpCode::ANewArray => "anewarray",
            OpCode::AAStore => "aastore",
            OpCode::Return => "return",
            OpCode::Unresolved | OpCode::UnresolvedBranch => "????",
            OpCode::UnresolvedNeg => "?neg",
        }
    }

    /// Net change in operand stack depth.
    ///
    /// Invocations depend on the method descriptor and return `None`; see
    /// [`method_stack_effect`](super::descriptor::method_stack_effect).
    pub fn stack_effect(&self) -> Option<i32> {
        Some(match self {
            OpCode::Ldc | OpCode::GetStatic | OpCode::New | OpCode::Dup | OpCode::ALoad0 => 1,

            OpCode::PutStatic | OpCode::Pop => -1,

            OpCode::IAdd
            | OpCode::ISub
            | OpCode::IMul
            | OpCode::IDiv
            | OpCode::FAdd
            | OpCode::FSub
            | OpCode::FMul
            | OpCode::FDiv
            | OpCode::FCmpL
            | OpCode::FCmpG
            | OpCode::Unresolved => -1,

            OpCode::INeg | OpCode::FNeg | OpCode::UnresolvedNeg => 0,

            OpCode::IfICmpGt
            | OpCode::IfICmpLt
            | OpCode::IfICmpGe
            | OpCode::IfICmpLe
            | OpCode::IfICmpEq
            | OpCode::IfICmpNe
            | OpCode::UnresolvedBranch => -2,

            OpCode::IfGt
            | OpCode::IfLt
            | OpCode::IfGe
            | OpCode::IfLe
            | OpCode::IfEq
            | OpCode::IfNe => -1,

            OpCode::Goto | OpCode::Return | OpCode::ANewArray => 0,

            OpCode::AAStore => -3,

            OpCode::InvokeNonVirtual | OpCode::InvokeVirtual | OpCode::InvokeStatic => return None,
        })
    }

    /// Whether the operand is a label.
    pub fn is_branch(&self) -> bool {
        matches!(
            self,
            OpCode::IfICmpGt
                | OpCode::IfICmpLt
                | OpCode::IfICmpGe
                | OpCode::IfICmpLe
                | OpCode::IfICmpEq
                | OpCode::IfICmpNe
                | OpCode::IfGt
                | OpCode::IfLt
                | OpCode::IfGe
                | OpCode::IfLe
                | OpCode::IfEq
                | OpCode::IfNe
                | OpCode::Goto
                | OpCode::UnresolvedBranch
        )
    }

    /// Whether this is a placeholder rather than a real instruction.
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            OpCode::Unresolved | OpCode::UnresolvedBranch | OpCode::UnresolvedNeg
        )
    }

    /// Separator between mnemonic and operand in the listing.
    ///
    /// Constant loads, field access, array allocation and static calls use a
    /// tab; branches, object creation and instance calls a single space.
    pub(crate) fn operand_separator(&self) -> char {
        match self {
            OpCode::Ldc
            | OpCode::GetStatic
            | OpCode::PutStatic
            | OpCode::ANewArray
            | OpCode::InvokeStatic => '\t',
            _ => ' ',
        }
    }
}
