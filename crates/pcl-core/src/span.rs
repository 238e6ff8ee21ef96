//! Source location tracking for diagnostics.
//!
//! Provides [`Span`], the position every tree node carries so that
//! warnings and line annotations can point back into the PCL source.

use std::fmt;

/// A span of source code, represented by its starting position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed). Zero means "no position".
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    /// Create a new span from a line, column, and length.
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self { line, col, len: 0 }
    }

    /// Whether this span points at a real source line.
    ///
    /// Trees built without position information use `Span::default()`.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.line != 0
    }

    /// Cover both spans, starting at `self`.
    ///
    /// Spans on different lines keep the first position and add the lengths.
    pub fn to(self, other: Span) -> Span {
        if self.line != other.line {
            return Span {
                len: self.len + other.len,
                ..self
            };
        }
        let start = self.col.min(other.col);
        let end = (self.col + self.len).max(other.col + other.len);
        Span {
            line: self.line,
            col: start,
            len: end - start,
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
