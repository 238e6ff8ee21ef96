//! Label allocation for control flow.
//!
//! Labels are issued from a per-unit counter, so nested constructs never
//! share a target. The allocator also remembers which labels have been
//! placed, since each label may be defined only once.

use rustc_hash::FxHashSet;

use crate::bytecode::Label;

/// Issues unique, monotonically increasing labels.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    /// Next identifier to hand out
    next: u32,
    /// Labels already placed in the listing
    defined: FxHashSet<Label>,
}

impl LabelAllocator {
    /// Create an allocator starting at `Label_0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh label.
    pub fn allocate(&mut self) -> Label {
        let label = Label(self.next);
        self.next += 1;
        label
    }

    /// Record that `label` was placed.
    ///
    /// Returns `false` if it had already been placed.
    pub fn mark_defined(&mut self, label: Label) -> bool {
        self.defined.insert(label)
    }

    /// Whether `label` has been placed.
    pub fn is_defined(&self, label: Label) -> bool {
        self.defined.contains(&label)
    }

    /// Number of labels allocated so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_allocator_is_empty() {
        let labels = LabelAllocator::new();
        assert_eq!(labels.allocated(), 0);
    }

    #[test]
    fn labels_are_monotonic() {
        let mut labels = LabelAllocator::new();
        let a = labels.allocate();
        let b = labels.allocate();
        let c = labels.allocate();

        assert_eq!((a.id(), b.id(), c.id()), (0, 1, 2));
        assert_eq!(labels.allocated(), 3);
    }

    #[test]
    fn many_labels_are_distinct() {
        let mut labels = LabelAllocator::new();
        let issued: FxHashSet<Label> = (0..500).map(|_| labels.allocate()).collect();
        assert_eq!(issued.len(), 500);
    }

    #[test]
    fn define_once() {
        let mut labels = LabelAllocator::new();
        let label = labels.allocate();

        assert!(!labels.is_defined(label));
        assert!(labels.mark_defined(label));
        assert!(labels.is_defined(label));
        assert!(!labels.mark_defined(label));
    }
}
