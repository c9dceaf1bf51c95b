//! Test utilities and mock types for Strata development.
//!
//! Provides mock implementations of [`GrowthPolicy`] that record or
//! simplify growth decisions, plus element fixtures in [`fixtures`] for
//! checking that buffer moves neither lose nor duplicate elements.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;

use strata_core::{GrowthPolicy, ListError};

/// One call to [`GrowthPolicy::new_length`] as seen by [`RecordingPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthCall {
    pub old: usize,
    pub min_growth: usize,
    pub pref_growth: usize,
    /// `None` when the call failed.
    pub granted: Option<usize>,
}

/// Mock [`GrowthPolicy`] that uses the standard arithmetic but records
/// every `new_length` call.
///
/// Inspect with [`calls`](RecordingPolicy::calls) after driving a list.
/// First growth of a deferred list never reaches the policy's
/// `new_length`, so it does not appear in the record.
#[derive(Clone, Debug)]
pub struct RecordingPolicy {
    default_capacity: usize,
    max_length: usize,
    calls: RefCell<Vec<GrowthCall>>,
}

impl RecordingPolicy {
    pub fn new(default_capacity: usize, max_length: usize) -> Self {
        Self {
            default_capacity,
            max_length,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<GrowthCall> {
        self.calls.borrow().clone()
    }
}

impl Default for RecordingPolicy {
    fn default() -> Self {
        Self::new(10, isize::MAX as usize)
    }
}

impl GrowthPolicy for RecordingPolicy {
    fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    fn max_length(&self) -> usize {
        self.max_length
    }

    fn new_length(
        &self,
        old: usize,
        min_growth: usize,
        pref_growth: usize,
    ) -> Result<usize, ListError> {
        let result = strata_core::growth::new_length(
            old,
            min_growth,
            pref_growth,
            self.soft_max_length(),
            self.max_length,
        );
        self.calls.borrow_mut().push(GrowthCall {
            old,
            min_growth,
            pref_growth,
            granted: result.as_ref().ok().copied(),
        });
        result
    }
}

/// Mock [`GrowthPolicy`] that never over-allocates: every growth adds
/// exactly the slots that are required.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactPolicy {
    pub default_capacity: usize,
}

impl GrowthPolicy for ExactPolicy {
    fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    fn max_length(&self) -> usize {
        isize::MAX as usize
    }

    fn preferred_growth(&self, _old: usize) -> usize {
        0
    }
}

/// Mock [`GrowthPolicy`] whose `new_length` answers `Ok(old)`: it claims
/// success but never adds a slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct StingyPolicy {
    pub default_capacity: usize,
}

impl GrowthPolicy for StingyPolicy {
    fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    fn max_length(&self) -> usize {
        isize::MAX as usize
    }

    fn new_length(
        &self,
        old: usize,
        _min_growth: usize,
        _pref_growth: usize,
    ) -> Result<usize, ListError> {
        Ok(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_policy_records_success_and_failure() {
        let policy = RecordingPolicy::new(4, 20);
        assert_eq!(policy.new_length(10, 1, 5), Ok(12));
        assert!(policy.new_length(20, 1, 10).is_err());
        let calls = policy.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].granted, Some(12));
        assert_eq!(calls[1].granted, None);
    }

    #[test]
    fn stingy_policy_returns_old_length() {
        assert_eq!(StingyPolicy::default().new_length(7, 3, 3), Ok(7));
    }

    #[test]
    fn exact_policy_grows_by_minimum() {
        let policy = ExactPolicy::default();
        assert_eq!(policy.new_length(10, 1, policy.preferred_growth(10)), Ok(11));
    }
}
