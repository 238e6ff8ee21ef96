//! Program and declaration nodes.

use pcl_core::{Span, TypeTag};

use crate::stmt::Block;

/// A variable declaration, `name: type`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDecl<'ast> {
    /// Variable name
    pub name: &'ast str,
    /// Declared type
    pub ty: TypeTag,
    /// Source location
    pub span: Span,
}

/// One compilation unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'ast> {
    /// Program name; also the generated class name
    pub name: &'ast str,
    /// Top-level variable declarations, in source order
    pub decls: &'ast [VarDecl<'ast>],
    /// Main statement block
    pub body: Block<'ast>,
    /// Full source text, when the front end kept it
    pub source: Option<&'ast str>,
    /// Source location
    pub span: Span,
}

impl<'ast> Program<'ast> {
    /// The trimmed source text of a 1-indexed line.
    ///
    /// Returns `None` without source text, for line 0, or past the end.
    pub fn source_line(&self, line: u32) -> Option<&'ast str> {
        let index = (line as usize).checked_sub(1)?;
        self.source?.lines().nth(index).map(str::trim)
    }
}
