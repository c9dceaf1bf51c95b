//! Contiguous slot buffers backing an array list.
//!
//! A [`BackingStore`] is either unallocated (in one of two flavours) or an
//! owned, fixed-length `Box<[Option<E>]>`. It is never resized in place:
//! every capacity change allocates a replacement, moves the live prefix
//! across, and drops the old buffer.

use std::mem;

use strata_core::ListError;

/// Owned slot buffer with explicit unallocated states.
///
/// The two zero-capacity states differ only in how the owning list
/// grows out of them:
///
/// - **explicit-empty** ([`empty`](Self::empty)): stays empty until an
///   insertion, then grows with the policy's ordinary formula.
/// - **deferred** ([`deferred`](Self::deferred)): inflates straight to the
///   policy's default capacity on first insertion.
///
/// An allocated store always has at least one slot. Slots past the
/// owner's length hold `None`.
#[derive(Debug)]
pub struct BackingStore<E> {
    state: StoreState<E>,
}

#[derive(Debug)]
enum StoreState<E> {
    Unallocated { deferred: bool },
    Allocated(Box<[Option<E>]>),
}

impl<E> BackingStore<E> {
    /// An explicit-empty store. Does not allocate.
    pub fn empty() -> Self {
        Self {
            state: StoreState::Unallocated { deferred: false },
        }
    }

    /// A deferred store that inflates to the default capacity on first
    /// growth. Does not allocate.
    pub fn deferred() -> Self {
        Self {
            state: StoreState::Unallocated { deferred: true },
        }
    }

    /// Allocate exactly `capacity` empty slots.
    ///
    /// A capacity of zero yields an explicit-empty store.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the allocator refuses the request.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let slots = alloc_slots(capacity, 0)?;
        Ok(Self {
            state: StoreState::Allocated(slots.into_boxed_slice()),
        })
    }

    /// Take ownership of `elements`, sized exactly to their count.
    ///
    /// An empty vector yields an explicit-empty store.
    pub fn from_vec(elements: Vec<E>) -> Self {
        if elements.is_empty() {
            return Self::empty();
        }
        Self {
            state: StoreState::Allocated(elements.into_iter().map(Some).collect()),
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        match &self.state {
            StoreState::Unallocated { .. } => 0,
            StoreState::Allocated(slots) => slots.len(),
        }
    }

    /// Whether this store inflates to the default capacity on first growth.
    pub fn is_deferred(&self) -> bool {
        matches!(self.state, StoreState::Unallocated { deferred: true })
    }

    /// Whether a buffer is currently allocated.
    pub fn is_allocated(&self) -> bool {
        matches!(self.state, StoreState::Allocated(_))
    }

    /// All slots, live and unused.
    pub fn slots(&self) -> &[Option<E>] {
        match &self.state {
            StoreState::Unallocated { .. } => &[],
            StoreState::Allocated(slots) => slots,
        }
    }

    /// All slots, live and unused, mutably.
    pub fn slots_mut(&mut self) -> &mut [Option<E>] {
        match &mut self.state {
            StoreState::Unallocated { .. } => &mut [],
            StoreState::Allocated(slots) => slots,
        }
    }

    /// Replace the buffer with one of `new_capacity` slots, moving the
    /// first `live` elements into its prefix in order.
    ///
    /// The replacement is allocated before anything moves, so a failed
    /// allocation leaves this store untouched. A `new_capacity` of zero
    /// yields an explicit-empty store.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] if the allocator refuses the request.
    ///
    /// # Panics
    ///
    /// Panics if `live` exceeds the current capacity or `new_capacity`.
    pub fn reallocate(&mut self, new_capacity: usize, live: usize) -> Result<(), ListError> {
        assert!(live <= new_capacity, "live prefix must fit the new buffer");
        if new_capacity == 0 {
            self.state = StoreState::Unallocated { deferred: false };
            return Ok(());
        }
        let old_capacity = self.capacity();
        let mut fresh = alloc_slots(new_capacity, old_capacity)?;
        for (dst, src) in fresh.iter_mut().zip(&mut self.slots_mut()[..live]) {
            *dst = src.take();
        }
        self.state = StoreState::Allocated(fresh.into_boxed_slice());
        Ok(())
    }

    /// Shrink the buffer to exactly `live` slots, releasing the rest.
    ///
    /// Shrinking to zero yields an explicit-empty store.
    ///
    /// # Panics
    ///
    /// Panics if `live` exceeds the current capacity.
    pub fn shrink_to(&mut self, live: usize) {
        assert!(live <= self.capacity(), "cannot shrink past capacity");
        if live == 0 {
            self.state = StoreState::Unallocated { deferred: false };
            return;
        }
        let state = mem::replace(&mut self.state, StoreState::Unallocated { deferred: false });
        if let StoreState::Allocated(slots) = state {
            let mut slots = slots.into_vec();
            slots.truncate(live);
            self.state = StoreState::Allocated(slots.into_boxed_slice());
        }
    }

    /// Consume the store, keeping only the first `live` slots.
    ///
    /// Reuses the existing allocation.
    pub fn into_slots(self, live: usize) -> Vec<Option<E>> {
        match self.state {
            StoreState::Unallocated { .. } => Vec::new(),
            StoreState::Allocated(slots) => {
                let mut slots = slots.into_vec();
                slots.truncate(live);
                slots
            }
        }
    }

    /// Memory held by the slot buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity() * mem::size_of::<Option<E>>()
    }
}

fn alloc_slots<E>(capacity: usize, old_capacity: usize) -> Result<Vec<Option<E>>, ListError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ListError::CapacityExceeded {
            current: old_capacity,
            min_growth: capacity.saturating_sub(old_capacity),
        })?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}
