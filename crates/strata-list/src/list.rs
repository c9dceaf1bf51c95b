//! The growable array list.
//!
//! [`ArrayList`] composes a [`BackingStore`] with a [`GrowthPolicy`]. Every
//! operation that can increase the length first checks whether capacity
//! suffices; if not, the policy picks a new capacity, the store is
//! replaced, and only then does the mutation proceed. A failure at any of
//! those steps returns before the list is touched.

use std::fmt;
use std::hash::{Hash, Hasher};

use strata_core::{GrowthPolicy, ListError, StructuralVersion};

use crate::config::GrowthConfig;
use crate::cursor::Cursor;
use crate::iter::{IntoIter, Iter};
use crate::store::BackingStore;

/// An ordered, contiguous, growable sequence of `E`.
///
/// Appends are amortized O(1); indexed reads and writes are O(1);
/// insertion and removal at arbitrary positions are O(n).
///
/// The growth policy `P` is injected at construction and defaults to
/// [`GrowthConfig`] (first growth to 10 slots, then +50%).
///
/// Not synchronised: share across threads only behind external locking.
pub struct ArrayList<E, P = GrowthConfig> {
    store: BackingStore<E>,
    /// Number of live slots; always `<= store.capacity()`.
    len: usize,
    version: StructuralVersion,
    policy: P,
}

impl<E> ArrayList<E, GrowthConfig> {
    /// Create an empty list that allocates nothing until first insertion,
    /// then inflates to [`GrowthConfig::DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_policy(GrowthConfig::new())
    }

    /// Create an empty list with exactly `capacity` slots.
    ///
    /// A capacity of zero allocates nothing; such a list grows with the
    /// ordinary 50% rule rather than jumping to the default capacity.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if `capacity` is above the policy's
    /// `max_length` or the allocator refuses it.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_capacity_and_policy(capacity, GrowthConfig::new())
    }

    /// Like [`with_capacity`](Self::with_capacity), for capacities that
    /// arrive as signed integers.
    ///
    /// # Errors
    ///
    /// - [`ListError::InvalidArgument`] if `requested` is negative. Nothing
    ///   is allocated.
    /// - [`ListError::CapacityExceeded`] as for `with_capacity`.
    pub fn with_requested_capacity(requested: i64) -> Result<Self, ListError> {
        if requested < 0 {
            return Err(ListError::InvalidArgument { requested });
        }
        Self::with_capacity(usize::try_from(requested).unwrap_or(usize::MAX))
    }

    /// Copy every element of `source`, in iteration order, into a buffer
    /// sized exactly to the source length.
    ///
    /// # Errors
    ///
    /// [`ListError::NullReference`] if `source` is `None`.
    pub fn from_source<I>(source: Option<I>) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = E>,
    {
        Self::from_source_with_policy(source, GrowthConfig::new())
    }
}

impl<E> Default for ArrayList<E, GrowthConfig> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Queries and non-growing mutations ──────────────────────────────

impl<E, P> ArrayList<E, P> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// The current structural version.
    pub fn version(&self) -> StructuralVersion {
        self.version
    }

    /// The growth policy this list was built with.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Memory held by the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.store.memory_bytes()
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&E, ListError> {
        self.live_slots()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// The element at `index`, mutably.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut E, ListError> {
        let len = self.len;
        self.live_slots_mut()
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// Never changes the length, never grows, and does not count as a
    /// structural mutation.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: E) -> Result<E, ListError> {
        let len = self.len;
        let slot = self
            .live_slots_mut()
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        Ok(slot.replace(value).expect("live slot holds an element"))
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<E, ListError> {
        let len = self.len;
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        let slots = &mut self.store.slots_mut()[..len];
        let removed = slots[index].take();
        slots[index..].rotate_left(1);
        self.len -= 1;
        self.version.bump();
        Ok(removed.expect("live slot holds an element"))
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.live_slots_mut() {
            *slot = None;
        }
        self.len = 0;
        self.version.bump();
    }

    /// Shrink the backing buffer to exactly [`len`](Self::len) slots.
    ///
    /// An empty list releases its buffer entirely. Calling this twice in
    /// a row leaves the capacity where the first call put it.
    pub fn trim_to_size(&mut self) {
        self.version.bump();
        let old_capacity = self.capacity();
        if self.len < old_capacity {
            self.store.shrink_to(self.len);
            tracing::trace!(
                message = "trimmed backing store",
                old_capacity,
                new_capacity = self.len
            );
        }
    }

    /// Borrowing iterator over the elements in order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.live_slots())
    }

    /// A fail-fast cursor positioned before the first element.
    ///
    /// The cursor records the current version and refuses to continue if
    /// the list is structurally modified by anything other than
    /// [`Cursor::remove`].
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.version)
    }

    fn live_slots(&self) -> &[Option<E>] {
        &self.store.slots()[..self.len]
    }

    fn live_slots_mut(&mut self) -> &mut [Option<E>] {
        let len = self.len;
        &mut self.store.slots_mut()[..len]
    }
}

// ── Search ─────────────────────────────────────────────────────────

impl<E: PartialEq, P> ArrayList<E, P> {
    /// Position of the first element equal to `value`.
    ///
    /// Lists of `Option<T>` find absent entries with `&None`.
    pub fn index_of(&self, value: &E) -> Option<usize> {
        self.live_slots()
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    /// Position of the last element equal to `value`.
    pub fn last_index_of(&self, value: &E) -> Option<usize> {
        self.live_slots()
            .iter()
            .rposition(|slot| slot.as_ref() == Some(value))
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &E) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove the first element equal to `value`.
    ///
    /// Returns whether an element was removed.
    pub fn remove_item(&mut self, value: &E) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }
}

// ── Snapshots ──────────────────────────────────────────────────────

impl<E: Clone, P> ArrayList<E, P> {
    /// A detached copy of the elements, exactly `len` long.
    pub fn to_array(&self) -> Box<[E]> {
        self.iter().cloned().collect()
    }

    /// Copy the elements into `dest` when it is long enough, otherwise into
    /// a freshly allocated buffer of exactly `len` slots.
    ///
    /// When `dest` is strictly longer than the list, `dest[len]` is set to
    /// `None` to mark where the copied content ends. Slots after that are
    /// left as they were.
    pub fn to_array_in<U>(&self, mut dest: Box<[Option<U>]>) -> Box<[Option<U>]>
    where
        E: Into<U>,
    {
        if dest.len() < self.len {
            return self.iter().map(|e| Some(e.clone().into())).collect();
        }
        for (slot, e) in dest.iter_mut().zip(self.iter()) {
            *slot = Some(e.clone().into());
        }
        if dest.len() > self.len {
            dest[self.len] = None;
        }
        dest
    }
}

// ── Growth ─────────────────────────────────────────────────────────

impl<E, P: GrowthPolicy> ArrayList<E, P> {
    /// Create an empty, unallocated list that inflates to the policy's
    /// default capacity on first insertion.
    pub fn with_policy(policy: P) -> Self {
        Self {
            store: BackingStore::deferred(),
            len: 0,
            version: StructuralVersion::INITIAL,
            policy,
        }
    }

    /// Create an empty list with exactly `capacity` slots under `policy`.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if `capacity` is above
    /// `policy.max_length()` or the allocator refuses it.
    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> Result<Self, ListError> {
        if capacity > policy.max_length() {
            return Err(ListError::CapacityExceeded {
                current: 0,
                min_growth: capacity,
            });
        }
        Ok(Self {
            store: BackingStore::with_capacity(capacity)?,
            len: 0,
            version: StructuralVersion::INITIAL,
            policy,
        })
    }

    /// Like [`ArrayList::from_source`], under `policy`.
    ///
    /// # Errors
    ///
    /// - [`ListError::NullReference`] if `source` is `None`.
    /// - [`ListError::CapacityExceeded`] if the source is longer than
    ///   `policy.max_length()`.
    pub fn from_source_with_policy<I>(source: Option<I>, policy: P) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = E>,
    {
        let elements: Vec<E> = source.ok_or(ListError::NullReference)?.into_iter().collect();
        let len = elements.len();
        if len > policy.max_length() {
            return Err(ListError::CapacityExceeded {
                current: 0,
                min_growth: len,
            });
        }
        Ok(Self {
            store: BackingStore::from_vec(elements),
            len,
            version: StructuralVersion::INITIAL,
            policy,
        })
    }

    /// Append `value` after the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the list is full and cannot grow.
    /// The list is unchanged and `value` is dropped.
    pub fn append(&mut self, value: E) -> Result<(), ListError> {
        self.reserve_one()?;
        let len = self.len;
        self.store.slots_mut()[len] = Some(value);
        self.len += 1;
        self.version.bump();
        Ok(())
    }

    /// Insert `value` at `index`, shifting the elements at `index..len` one
    /// slot right. Inserting at `len` appends.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] unless `index <= len`.
    /// - [`ListError::CapacityExceeded`] if the list is full and cannot grow.
    pub fn insert(&mut self, index: usize, value: E) -> Result<(), ListError> {
        let len = self.len;
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        self.reserve_one()?;
        let slots = &mut self.store.slots_mut()[..=len];
        slots[len] = Some(value);
        slots[index..].rotate_right(1);
        self.len += 1;
        self.version.bump();
        Ok(())
    }

    /// Append every element of `values` in order.
    ///
    /// The batch lands completely or not at all, with at most one growth.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the combined length cannot be
    /// accommodated.
    pub fn append_all<I>(&mut self, values: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = E>,
    {
        let incoming: Vec<E> = values.into_iter().collect();
        if incoming.is_empty() {
            return Ok(());
        }
        let len = self.len;
        let required = len
            .checked_add(incoming.len())
            .ok_or(ListError::CapacityExceeded {
                current: self.capacity(),
                min_growth: incoming.len(),
            })?;
        if required > self.capacity() {
            self.grow(required)?;
        }
        for (slot, value) in self.store.slots_mut()[len..required]
            .iter_mut()
            .zip(incoming)
        {
            *slot = Some(value);
        }
        self.len = required;
        self.version.bump();
        Ok(())
    }

    /// Grow, if necessary, so that at least `min_capacity` elements fit.
    ///
    /// A no-op when capacity already suffices, or when the list is still
    /// in its deferred state and `min_capacity` is within the default
    /// capacity it will inflate to anyway.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the growth cannot be satisfied.
    pub fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), ListError> {
        let first_growth = self
            .policy
            .default_capacity()
            .min(self.policy.max_length());
        let deferred_covers = self.store.is_deferred() && min_capacity <= first_growth;
        if min_capacity > self.capacity() && !deferred_covers {
            self.grow(min_capacity)?;
            self.version.bump();
        }
        Ok(())
    }

    /// The capacity growth would pick to fit `min_capacity` elements.
    ///
    /// Pure: nothing is allocated. `min_capacity` is expected to exceed the
    /// current capacity. A deferred list jumps to
    /// `max(default_capacity, min_capacity)`, capped at `max_length`; every
    /// other list asks the policy for `capacity + max(needed, preferred_growth)`.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if no capacity within the policy's
    /// `max_length` fits, or if the policy answers with fewer than
    /// `min_capacity` slots.
    pub fn next_capacity(&self, min_capacity: usize) -> Result<usize, ListError> {
        let old = self.capacity();
        if old == 0 && self.store.is_deferred() {
            if min_capacity > self.policy.max_length() {
                return Err(ListError::CapacityExceeded {
                    current: 0,
                    min_growth: min_capacity,
                });
            }
            return Ok(self
                .policy
                .default_capacity()
                .max(min_capacity)
                .min(self.policy.max_length()));
        }
        let min_growth = min_capacity.saturating_sub(old);
        let granted = self
            .policy
            .new_length(old, min_growth, self.policy.preferred_growth(old))?;
        // A policy that under-delivers is refused like one that says no.
        if granted < min_capacity {
            return Err(ListError::CapacityExceeded {
                current: old,
                min_growth,
            });
        }
        Ok(granted)
    }

    fn reserve_one(&mut self) -> Result<(), ListError> {
        if self.len == self.capacity() {
            let min_capacity = self.len.checked_add(1).ok_or(ListError::CapacityExceeded {
                current: self.len,
                min_growth: 1,
            })?;
            self.grow(min_capacity)?;
        }
        Ok(())
    }

    fn grow(&mut self, min_capacity: usize) -> Result<(), ListError> {
        let old_capacity = self.capacity();
        let new_capacity = self.next_capacity(min_capacity)?;
        self.store.reallocate(new_capacity, self.len)?;
        tracing::trace!(
            message = "grew backing store",
            old_capacity,
            new_capacity,
            len = self.len
        );
        Ok(())
    }
}

// ── Trait impls ────────────────────────────────────────────────────

impl<E: Clone, P: Clone> Clone for ArrayList<E, P> {
    /// An independent list holding clones of the elements in a buffer of
    /// exactly `len` slots, with its version reset.
    fn clone(&self) -> Self {
        Self {
            store: BackingStore::from_vec(self.iter().cloned().collect()),
            len: self.len,
            version: StructuralVersion::INITIAL,
            policy: self.policy.clone(),
        }
    }
}

impl<E: fmt::Debug, P> fmt::Debug for ArrayList<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: PartialEq, P, Q> PartialEq<ArrayList<E, Q>> for ArrayList<E, P> {
    fn eq(&self, other: &ArrayList<E, Q>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq, P> Eq for ArrayList<E, P> {}

impl<E: Hash, P> Hash for ArrayList<E, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for e in self.iter() {
            e.hash(state);
        }
    }
}

impl<E> From<Vec<E>> for ArrayList<E, GrowthConfig> {
    fn from(elements: Vec<E>) -> Self {
        let len = elements.len();
        Self {
            store: BackingStore::from_vec(elements),
            len,
            version: StructuralVersion::INITIAL,
            policy: GrowthConfig::new(),
        }
    }
}

impl<E> FromIterator<E> for ArrayList<E, GrowthConfig> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, E, P> IntoIterator for &'a ArrayList<E, P> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, P> IntoIterator for ArrayList<E, P> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        IntoIter::new(self.store, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> ArrayList<char> {
        ArrayList::from(vec!['A', 'B', 'C'])
    }

    fn tiny(default_capacity: usize, max_length: usize) -> GrowthConfig {
        GrowthConfig::with_limits(default_capacity, max_length).unwrap()
    }

    fn contents<E: Clone, P>(list: &ArrayList<E, P>) -> Vec<E> {
        list.iter().cloned().collect()
    }

    // ── construction ───────────────────────────────────────────

    #[test]
    fn new_list_allocates_nothing() {
        let list = ArrayList::<u32>::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 0);
        assert_eq!(list.memory_bytes(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn with_capacity_allocates_exactly() {
        let list = ArrayList::<u32>::with_capacity(7).unwrap();
        assert_eq!(list.capacity(), 7);
        assert!(list.is_empty());
    }

    #[test]
    fn negative_requested_capacity_is_invalid() {
        let result = ArrayList::<u32>::with_requested_capacity(-1);
        assert_eq!(
            result.unwrap_err(),
            ListError::InvalidArgument { requested: -1 }
        );
    }

    #[test]
    fn requested_capacity_delegates_when_non_negative() {
        let list = ArrayList::<u32>::with_requested_capacity(3).unwrap();
        assert_eq!(list.capacity(), 3);
        let zero = ArrayList::<u32>::with_requested_capacity(0).unwrap();
        assert_eq!(zero.capacity(), 0);
    }

    #[test]
    fn capacity_above_policy_limit_is_refused() {
        let result = ArrayList::<u32, _>::with_capacity_and_policy(21, tiny(4, 20));
        assert!(matches!(result, Err(ListError::CapacityExceeded { .. })));
    }

    #[test]
    fn absent_source_is_null_reference() {
        let result = ArrayList::<u32>::from_source(None::<Vec<u32>>);
        assert_eq!(result.unwrap_err(), ListError::NullReference);
    }

    #[test]
    fn from_source_copies_in_order_with_exact_capacity() {
        let list = ArrayList::from_source(Some(1..=4)).unwrap();
        assert_eq!(contents(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn empty_source_grows_like_explicit_empty() {
        let mut list = ArrayList::<u32>::from_source(Some(Vec::new())).unwrap();
        assert_eq!(list.capacity(), 0);
        list.append(1).unwrap();
        assert_eq!(list.capacity(), 1);
    }

    #[test]
    fn source_longer_than_policy_limit_is_refused() {
        let result = ArrayList::from_source_with_policy(Some(0..30), tiny(4, 20));
        assert!(matches!(result, Err(ListError::CapacityExceeded { .. })));
    }

    // ── growth ─────────────────────────────────────────────────

    #[test]
    fn default_list_inflates_to_ten_on_first_append() {
        let mut list = ArrayList::new();
        assert_eq!(list.next_capacity(1), Ok(10));
        list.append('x').unwrap();
        assert_eq!(list.capacity(), 10);
    }

    #[test]
    fn full_list_of_ten_grows_to_fifteen() {
        let mut list: ArrayList<u32> = (0..10).collect();
        assert_eq!(list.capacity(), 10);
        assert_eq!(list.next_capacity(11), Ok(15));
        list.append(10).unwrap();
        assert_eq!(list.capacity(), 15);
    }

    #[test]
    fn explicit_empty_grows_one_slot_at_a_time_initially() {
        let mut list = ArrayList::<u32>::with_capacity(0).unwrap();
        list.append(1).unwrap();
        assert_eq!(list.capacity(), 1);
        list.append(2).unwrap();
        assert_eq!(list.capacity(), 2);
        list.append(3).unwrap();
        assert_eq!(list.capacity(), 3);
        list.append(4).unwrap();
        assert_eq!(list.capacity(), 4);
        list.append(5).unwrap();
        assert_eq!(list.capacity(), 6);
    }

    #[test]
    fn appends_read_back_in_order_across_reallocations() {
        let mut list = ArrayList::new();
        for i in 0..1_000u32 {
            list.append(i).unwrap();
            assert!(list.len() <= list.capacity());
        }
        assert_eq!(list.len(), 1_000);
        for i in 0..1_000u32 {
            assert_eq!(list.get(i as usize), Ok(&i));
        }
    }

    #[test]
    fn growth_follows_soft_then_hard_limit() {
        // default 4, max 20, soft max 12
        let mut list = ArrayList::with_policy(tiny(4, 20));
        let mut capacities = Vec::new();
        for i in 0..20u32 {
            list.append(i).unwrap();
            if capacities.last() != Some(&list.capacity()) {
                capacities.push(list.capacity());
            }
        }
        assert_eq!(
            capacities,
            vec![4, 6, 9, 12, 13, 14, 15, 16, 17, 18, 19, 20]
        );
    }

    #[test]
    fn failed_growth_leaves_list_untouched() {
        let mut list = ArrayList::with_policy(tiny(4, 20));
        list.append_all(0..20u32).unwrap();
        let version = list.version();
        let result = list.append(99);
        assert_eq!(
            result,
            Err(ListError::CapacityExceeded {
                current: 20,
                min_growth: 1,
            })
        );
        assert_eq!(list.len(), 20);
        assert_eq!(list.capacity(), 20);
        assert_eq!(list.version(), version);
        assert_eq!(contents(&list), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn ensure_capacity_is_noop_when_sufficient() {
        let mut list = ArrayList::<u32>::with_capacity(8).unwrap();
        let version = list.version();
        list.ensure_capacity(8).unwrap();
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.version(), version);
    }

    #[test]
    fn ensure_capacity_defers_within_default_capacity() {
        let mut list = ArrayList::<u32>::new();
        list.ensure_capacity(10).unwrap();
        assert_eq!(list.capacity(), 0);
        assert_eq!(list.version(), StructuralVersion::INITIAL);
    }

    #[test]
    fn ensure_capacity_beyond_default_allocates_requested() {
        let mut list = ArrayList::<u32>::new();
        list.ensure_capacity(25).unwrap();
        assert_eq!(list.capacity(), 25);
        assert_eq!(list.version(), StructuralVersion(1));
    }

    #[test]
    fn ensure_capacity_uses_half_growth_when_larger() {
        let mut list = ArrayList::<u32>::with_capacity(10).unwrap();
        list.ensure_capacity(11).unwrap();
        assert_eq!(list.capacity(), 15);
        list.ensure_capacity(40).unwrap();
        assert_eq!(list.capacity(), 40);
    }

    #[test]
    fn ensure_capacity_past_limit_fails() {
        let mut list = ArrayList::<u32, _>::with_policy(tiny(4, 20));
        assert!(matches!(
            list.ensure_capacity(21),
            Err(ListError::CapacityExceeded { .. })
        ));
        assert_eq!(list.capacity(), 0);
    }

    // ── indexed access ─────────────────────────────────────────

    #[test]
    fn get_checks_bounds() {
        let list = abc();
        assert_eq!(list.get(2), Ok(&'C'));
        assert_eq!(
            list.get(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        // A negative index wrapped into usize is still out of range.
        assert!(matches!(
            list.get((-1isize) as usize),
            Err(ListError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn get_on_empty_list_fails() {
        let list = ArrayList::<u32>::new();
        assert!(list.get(0).is_err());
    }

    #[test]
    fn set_returns_previous_and_keeps_shape() {
        let mut list = abc();
        let version = list.version();
        assert_eq!(list.set(1, 'Z'), Ok('B'));
        assert_eq!(contents(&list), vec!['A', 'Z', 'C']);
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.version(), version);
        assert!(list.set(3, 'Q').is_err());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut list = abc();
        *list.get_mut(0).unwrap() = 'a';
        assert_eq!(list.get(0), Ok(&'a'));
        assert!(list.get_mut(3).is_err());
    }

    // ── insert / remove ────────────────────────────────────────

    #[test]
    fn insert_shifts_tail_right() {
        let mut list = abc();
        list.insert(1, 'X').unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.get(1), Ok(&'X'));
        assert_eq!(list.get(2), Ok(&'B'));
        assert_eq!(contents(&list), vec!['A', 'X', 'B', 'C']);
    }

    #[test]
    fn insert_at_front_and_end() {
        let mut list = abc();
        list.insert(0, '<').unwrap();
        list.insert(list.len(), '>').unwrap();
        assert_eq!(contents(&list), vec!['<', 'A', 'B', 'C', '>']);
    }

    #[test]
    fn insert_past_end_fails_without_mutation() {
        let mut list = abc();
        let version = list.version();
        assert_eq!(
            list.insert(4, 'X'),
            Err(ListError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list.version(), version);
    }

    #[test]
    fn insert_into_deferred_list_inflates() {
        let mut list = ArrayList::new();
        list.insert(0, 5u8).unwrap();
        assert_eq!(list.capacity(), 10);
        assert_eq!(list.get(0), Ok(&5));
    }

    #[test]
    fn remove_shifts_tail_left() {
        let mut list = abc();
        assert_eq!(list.remove(0), Ok('A'));
        assert_eq!(contents(&list), vec!['B', 'C']);
        assert_eq!(list.capacity(), 3);
        assert!(list.remove(2).is_err());
    }

    #[test]
    fn remove_item_removes_first_match_only() {
        let mut list = ArrayList::from(vec![1, 2, 1, 3]);
        assert!(list.remove_item(&1));
        assert_eq!(contents(&list), vec![2, 1, 3]);
        assert!(!list.remove_item(&7));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut list = abc();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 3);
        list.append('D').unwrap();
        assert_eq!(contents(&list), vec!['D']);
    }

    #[test]
    fn append_all_grows_once() {
        let mut list = ArrayList::<u32>::with_capacity(2).unwrap();
        list.append(0).unwrap();
        let version = list.version();
        list.append_all(1..6).unwrap();
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(list.capacity(), 6);
        assert_eq!(list.version(), StructuralVersion(version.0 + 1));
    }

    #[test]
    fn append_all_past_limit_is_all_or_nothing() {
        let mut list = ArrayList::with_policy(tiny(4, 20));
        list.append_all(0..15u32).unwrap();
        assert!(list.append_all(0..6u32).is_err());
        assert_eq!(list.len(), 15);
    }

    // ── search ─────────────────────────────────────────────────

    #[test]
    fn search_finds_first_and_last() {
        let list = ArrayList::from(vec![3, 1, 4, 1, 5]);
        assert_eq!(list.index_of(&1), Some(1));
        assert_eq!(list.last_index_of(&1), Some(3));
        assert_eq!(list.index_of(&9), None);
        assert_eq!(list.last_index_of(&9), None);
        assert!(list.contains(&5));
        assert!(!list.contains(&2));
    }

    #[test]
    fn search_ignores_unused_slots() {
        let mut list = ArrayList::from(vec![7, 8]);
        list.remove(1).unwrap();
        assert_eq!(list.index_of(&8), None);
    }

    #[test]
    fn absent_entries_are_searchable() {
        let list = ArrayList::from(vec![Some(1), None, Some(2), None]);
        assert_eq!(list.index_of(&None), Some(1));
        assert_eq!(list.last_index_of(&None), Some(3));
        assert_eq!(list.index_of(&Some(2)), Some(2));
    }

    // ── snapshots ──────────────────────────────────────────────

    #[test]
    fn to_array_is_detached() {
        let mut list = abc();
        let snapshot = list.to_array();
        list.set(0, 'Q').unwrap();
        list.append('D').unwrap();
        assert_eq!(&*snapshot, &['A', 'B', 'C']);
    }

    #[test]
    fn to_array_in_short_destination_allocates() {
        let list = abc();
        let out = list.to_array_in::<char>(vec![None; 1].into_boxed_slice());
        assert_eq!(&*out, &[Some('A'), Some('B'), Some('C')]);
    }

    #[test]
    fn to_array_in_long_destination_marks_end() {
        let list = abc();
        let dest = vec![Some('z'); 5].into_boxed_slice();
        let out = list.to_array_in(dest);
        assert_eq!(
            &*out,
            &[Some('A'), Some('B'), Some('C'), None, Some('z')]
        );
    }

    #[test]
    fn to_array_in_exact_destination_has_no_marker() {
        let list = abc();
        let out = list.to_array_in(vec![None; 3].into_boxed_slice());
        assert_eq!(&*out, &[Some('A'), Some('B'), Some('C')]);
    }

    #[test]
    fn to_array_in_converts_element_kind() {
        let list = ArrayList::from(vec![1u8, 2]);
        let out: Box<[Option<u32>]> = list.to_array_in(vec![None; 2].into_boxed_slice());
        assert_eq!(&*out, &[Some(1u32), Some(2)]);
    }

    #[test]
    fn clone_is_exact_and_independent() {
        let mut list = ArrayList::new();
        list.append_all(['A', 'B']).unwrap();
        assert_eq!(list.capacity(), 10);
        let copy = list.clone();
        assert_eq!(copy.capacity(), 2);
        assert_eq!(copy.version(), StructuralVersion::INITIAL);
        list.set(0, 'Z').unwrap();
        list.append('C').unwrap();
        assert_eq!(contents(&copy), vec!['A', 'B']);
    }

    #[test]
    fn clone_of_empty_list_grows_like_explicit_empty() {
        let list = ArrayList::<u32>::new();
        let mut copy = list.clone();
        copy.append(1).unwrap();
        assert_eq!(copy.capacity(), 1);
    }

    #[test]
    fn trim_is_idempotent() {
        let mut list = ArrayList::new();
        list.append_all([1, 2, 3]).unwrap();
        list.trim_to_size();
        assert_eq!(list.capacity(), 3);
        list.trim_to_size();
        assert_eq!(list.capacity(), 3);
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[test]
    fn trim_empty_list_releases_buffer() {
        let mut list = ArrayList::<u32>::with_capacity(16).unwrap();
        list.trim_to_size();
        assert_eq!(list.capacity(), 0);
        list.append(1).unwrap();
        assert_eq!(list.capacity(), 1);
    }

    #[test]
    fn trim_bumps_version() {
        let mut list = abc();
        list.trim_to_size();
        assert_eq!(list.version(), StructuralVersion(1));
    }

    // ── traits ─────────────────────────────────────────────────

    #[test]
    fn equality_ignores_capacity_and_policy() {
        let a = abc();
        let mut b = ArrayList::with_policy(tiny(2, 50));
        b.append_all(['A', 'B', 'C']).unwrap();
        assert_eq!(a, b);
        b.append('D').unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn equal_lists_hash_equal() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |list: &ArrayList<char>| {
            let mut h = DefaultHasher::new();
            list.hash(&mut h);
            h.finish()
        };
        let mut grown = ArrayList::new();
        grown.append_all(['A', 'B', 'C']).unwrap();
        assert_eq!(hash(&abc()), hash(&grown));
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut list = ArrayList::new();
        list.append(1).unwrap();
        list.append(2).unwrap();
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    #[test]
    fn owned_iteration_yields_live_elements() {
        let mut list = ArrayList::new();
        list.append_all(vec![String::from("a"), String::from("b")]).unwrap();
        let collected: Vec<String> = list.into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[test]
    fn version_counts_structural_mutations() {
        let mut list = ArrayList::new();
        list.append(1).unwrap();
        list.insert(0, 0).unwrap();
        list.set(0, 5).unwrap();
        list.remove(1).unwrap();
        assert_eq!(list.version(), StructuralVersion(3));
    }
}
