//! Element fixtures that account for their own lifetimes.
//!
//! - [`DropLedger`] hands out [`Tracked`] values and counts how many
//!   have been dropped. A buffer move that duplicates an element shows up
//!   as too many drops; one that loses an element shows up as too few.

use std::cell::Cell;
use std::rc::Rc;

/// Issues [`Tracked`] elements and counts their drops.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    drops: Rc<Cell<usize>>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new tracked element carrying `id`.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked elements dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// An element that reports its drop to the [`DropLedger`] that issued it.
///
/// Compared by `id` only. Deliberately not `Clone`, so every drop
/// corresponds to exactly one `track` call.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
