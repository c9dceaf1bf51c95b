//! The structural version counter.

use std::fmt;

/// Counts structural mutations of a single list.
///
/// Bumped by every operation that changes the number of elements or
/// replaces the backing buffer. Traversal cursors snapshot it at creation
/// and compare before each step; a mismatch means the list changed under
/// them. It is a misuse detector, not a synchronisation primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuralVersion(pub u64);

impl StructuralVersion {
    /// The version of a list that has never been mutated.
    pub const INITIAL: Self = Self(0);

    /// Advance to the next version.
    ///
    /// Wraps on overflow; only equality is ever compared.
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

impl fmt::Display for StructuralVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StructuralVersion {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
