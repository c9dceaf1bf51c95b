//! Iterators over array list elements.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::store::BackingStore;

/// Borrowing iterator over a list's live elements.
///
/// Created by [`ArrayList::iter`](crate::ArrayList::iter).
#[derive(Clone, Debug)]
pub struct Iter<'a, E> {
    slots: slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(live: &'a [Option<E>]) -> Self {
        Self { slots: live.iter() }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().find_map(Option::as_ref)
    }
}

// Every live slot is occupied, so the slot count is the element count.
impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

/// Owning iterator over a list's elements.
///
/// Created by `ArrayList::into_iter`.
#[derive(Debug)]
pub struct IntoIter<E> {
    slots: vec::IntoIter<Option<E>>,
}

impl<E> IntoIter<E> {
    pub(crate) fn new(store: BackingStore<E>, len: usize) -> Self {
        Self {
            slots: store.into_slots(len).into_iter(),
        }
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().flatten().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().flatten().next()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}
