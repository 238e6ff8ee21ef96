//! Resolved type tags.

use std::fmt;

/// The type a semantic pass resolved for an expression or declaration.
///
/// Code generation only ever compares tags for exact equality against
/// `Integer` and `Real`; everything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeTag {
    /// `integer`
    Integer,
    /// `real`
    Real,
    /// Anything the semantic pass could not resolve to a numeric type.
    #[default]
    Unknown,
}

impl TypeTag {
    /// Whether this is one of the two numeric types.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, TypeTag::Integer | TypeTag::Real)
    }

    /// The tag shared by both operands, if they are the same numeric type.
    ///
    /// There is no promotion: `Integer` and `Real` together yield `None`.
    pub fn common_numeric(self, other: TypeTag) -> Option<TypeTag> {
        (self == other && self.is_numeric()).then_some(self)
    }

    /// The source-language spelling.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Real => "real",
            TypeTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
