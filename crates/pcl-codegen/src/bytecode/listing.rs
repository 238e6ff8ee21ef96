//! Assembly listing for one compilation unit.
//!
//! A [`Listing`] keeps the generated lines in structured form so callers can
//! inspect instructions and labels, and renders them to Jasmin text.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use super::OpCode;

/// A branch target, printed as `Label_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub(crate) u32);

impl Label {
    /// The numeric identifier.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label_{}", self.0)
    }
}

/// One line of the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `.class`, `.field`, `.method`, `.limit`, `.line`, ...
    Directive(String),
    /// `; text`
    Comment(String),
    /// Empty line
    Blank,
    /// `Label_<n>:`
    Label(Label),
    /// Instruction with an optional plain operand.
    Instruction {
        /// Mnemonic
        op: OpCode,
        /// Operand text
        operand: Option<String>,
    },
    /// Branch instruction.
    Branch {
        /// Mnemonic
        op: OpCode,
        /// Target
        target: Label,
    },
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Directive(text) => f.write_str(text),
            Line::Comment(text) => write!(f, "; {text}"),
            Line::Blank => Ok(()),
            Line::Label(label) => write!(f, "{label}:"),
            Line::Instruction { op, operand: None } => write!(f, "\t{}", op.mnemonic()),
            Line::Instruction {
                op,
                operand: Some(operand),
            } => write!(f, "\t{}{}{operand}", op.mnemonic(), op.operand_separator()),
            Line::Branch { op, target } => {
                write!(f, "\t{}{}{target}", op.mnemonic(), op.operand_separator())
            }
        }
    }
}

/// Generated lines, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    lines: Vec<Line>,
}

impl Listing {
    /// Create an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// All lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Opcodes in emission order, including branches.
    pub fn opcodes(&self) -> impl Iterator<Item = OpCode> + '_ {
        self.lines.iter().filter_map(|line| match line {
            Line::Instruction { op, .. } | Line::Branch { op, .. } => Some(*op),
            _ => None,
        })
    }

    /// How many times `op` was emitted.
    pub fn count(&self, op: OpCode) -> usize {
        self.opcodes().filter(|o| *o == op).count()
    }

    /// Labels in order of definition.
    pub fn defined_labels(&self) -> Vec<Label> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Label(label) => Some(*label),
                _ => None,
            })
            .collect()
    }

    /// Branch targets in order of reference.
    pub fn referenced_labels(&self) -> Vec<Label> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Branch { target, .. } => Some(*target),
                _ => None,
            })
            .collect()
    }

    /// Check that labels are well formed.
    ///
    /// Every label must be defined at most once and every branch target must
    /// be defined. Returns the offending labels, sorted.
    pub fn label_violations(&self) -> Vec<Label> {
        let mut definitions: FxHashMap<Label, usize> = FxHashMap::default();
        let mut bad: FxHashSet<Label> = FxHashSet::default();
        for line in &self.lines {
            if let Line::Label(label) = line {
                *definitions.entry(*label).or_default() += 1;
            }
        }
        for (label, count) in &definitions {
            if *count > 1 {
                bad.insert(*label);
            }
        }
        for target in self.referenced_labels() {
            if !definitions.contains_key(&target) {
                bad.insert(target);
            }
        }
        let mut bad: Vec<Label> = bad.into_iter().collect();
        bad.sort();
        bad
    }

    /// Render to Jasmin text, one line per entry, newline terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
