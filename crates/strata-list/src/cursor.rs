//! Fail-fast traversal that survives between borrows.
//!
//! A [`Cursor`] holds a position and the list version it last agreed with,
//! but no borrow of the list. Each step compares versions first, so a
//! structural change made between steps is reported instead of silently
//! skipping or repeating elements.

use strata_core::{ListError, StructuralVersion};

use crate::list::ArrayList;

/// Position-tracking cursor with modification detection.
///
/// Obtained from [`ArrayList::cursor`]. Removing through the cursor keeps
/// it valid; any other structural mutation invalidates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the element the next call to `next` returns.
    next: usize,
    /// Index of the element returned by the last `next`, if it is still
    /// eligible for removal.
    last_returned: Option<usize>,
    expected: StructuralVersion,
}

impl Cursor {
    pub(crate) fn new(expected: StructuralVersion) -> Self {
        Self {
            next: 0,
            last_returned: None,
            expected,
        }
    }

    /// Index of the element the next call to [`next`](Self::next) returns.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Whether a call to [`next`](Self::next) would yield an element or
    /// report a modification.
    pub fn has_next<E, P>(&self, list: &ArrayList<E, P>) -> bool {
        self.next != list.len()
    }

    /// Advance and return the next element, or `None` at the end.
    ///
    /// # Errors
    ///
    /// [`ListError::ConcurrentModification`] if `list` was structurally
    /// modified since this cursor last synchronised with it.
    pub fn next<'a, E, P>(
        &mut self,
        list: &'a ArrayList<E, P>,
    ) -> Result<Option<&'a E>, ListError> {
        self.check(list)?;
        let index = self.next;
        if index >= list.len() {
            return Ok(None);
        }
        let element = list.get(index)?;
        self.next = index + 1;
        self.last_returned = Some(index);
        Ok(Some(element))
    }

    /// Remove the element most recently returned by [`next`](Self::next).
    ///
    /// The cursor stays valid: the following `next` returns the element
    /// that came after the removed one.
    ///
    /// # Errors
    ///
    /// - [`ListError::NoCurrentElement`] if `next` has not returned an
    ///   element since the last removal.
    /// - [`ListError::ConcurrentModification`] as for `next`.
    pub fn remove<E, P>(&mut self, list: &mut ArrayList<E, P>) -> Result<E, ListError> {
        let index = self.last_returned.ok_or(ListError::NoCurrentElement)?;
        self.check(list)?;
        let removed = list.remove(index)?;
        self.next = index;
        self.last_returned = None;
        self.expected = list.version();
        Ok(removed)
    }

    fn check<E, P>(&self, list: &ArrayList<E, P>) -> Result<(), ListError> {
        let found = list.version();
        if found != self.expected {
            return Err(ListError::ConcurrentModification {
                expected: self.expected,
                found,
            });
        }
        Ok(())
    }
}
