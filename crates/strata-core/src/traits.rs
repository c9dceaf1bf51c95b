//! The growth policy abstraction.

use crate::error::ListError;
use crate::growth;

/// Decides how a list's backing buffer grows.
///
/// Implemented by configuration types to give lists an injectable,
/// integer-only sizing rule. Only [`default_capacity`](Self::default_capacity)
/// and [`max_length`](Self::max_length) are required; the remaining methods
/// default to 50% growth bounded by a soft maximum
/// [`SOFT_MAX_HEADROOM`](crate::SOFT_MAX_HEADROOM) slots below `max_length`.
pub trait GrowthPolicy {
    /// Capacity a default-constructed list inflates to on first insertion.
    fn default_capacity(&self) -> usize;

    /// Largest capacity this policy will ever hand out.
    fn max_length(&self) -> usize;

    /// Threshold that ordinary growth does not cross.
    fn soft_max_length(&self) -> usize {
        growth::soft_max_length(self.max_length())
    }

    /// Preferred number of slots to add to a buffer of `old` slots.
    fn preferred_growth(&self, old: usize) -> usize {
        old >> 1
    }

    /// Length of the replacement for a buffer of `old` slots that needs at
    /// least `min_growth` more.
    ///
    /// # Errors
    ///
    /// [`ListError::CapacityExceeded`] when the requirement cannot be met
    /// within [`max_length`](Self::max_length).
    fn new_length(
        &self,
        old: usize,
        min_growth: usize,
        pref_growth: usize,
    ) -> Result<usize, ListError> {
        growth::new_length(
            old,
            min_growth,
            pref_growth,
            self.soft_max_length(),
            self.max_length(),
        )
    }
}
