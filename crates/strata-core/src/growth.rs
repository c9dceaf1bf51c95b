//! Pure capacity arithmetic.
//!
//! These functions decide how large a replacement buffer should be. They
//! operate on integers only and know nothing about buffers or elements,
//! so any [`GrowthPolicy`](crate::GrowthPolicy) can reuse them with its
//! own limits.
//!
//! Two limits apply:
//!
//! - `max_length`: the largest length the policy will ever hand out.
//! - `soft_max`: a threshold [`SOFT_MAX_HEADROOM`] slots below
//!   `max_length`. Ordinary growth stays at or below it; only a request
//!   that cannot be satisfied otherwise goes past it.

use crate::error::ListError;

/// Distance between a policy's `max_length` and its soft maximum.
pub const SOFT_MAX_HEADROOM: usize = 8;

/// The soft maximum for a given hard limit.
pub fn soft_max_length(max_length: usize) -> usize {
    max_length.saturating_sub(SOFT_MAX_HEADROOM)
}

/// Compute the length of a replacement buffer.
///
/// `old` is the current capacity, `min_growth` the number of additional
/// slots that are strictly required and `pref_growth` the number the
/// policy would like to add (conventionally `old / 2`).
///
/// The preferred length `old + max(min_growth, pref_growth)` is used when
/// it lies in `(0, soft_max]`. Anything else falls back to
/// [`huge_length`].
///
/// # Errors
///
/// [`ListError::CapacityExceeded`] if even `old + min_growth` cannot be
/// represented within `max_length`.
pub fn new_length(
    old: usize,
    min_growth: usize,
    pref_growth: usize,
    soft_max: usize,
    max_length: usize,
) -> Result<usize, ListError> {
    match old.checked_add(min_growth.max(pref_growth)) {
        Some(preferred) if preferred > 0 && preferred <= soft_max => Ok(preferred),
        _ => huge_length(old, min_growth, soft_max, max_length),
    }
}

/// Length for growth that the preferred increment cannot serve.
///
/// Clamps to `soft_max` when the minimum requirement fits under it,
/// otherwise hands out exactly the minimum, accepting a near-maximum
/// allocation.
///
/// # Errors
///
/// [`ListError::CapacityExceeded`] if `old + min_growth` overflows or
/// exceeds `max_length`.
pub fn huge_length(
    old: usize,
    min_growth: usize,
    soft_max: usize,
    max_length: usize,
) -> Result<usize, ListError> {
    let exceeded = ListError::CapacityExceeded {
        current: old,
        min_growth,
    };
    let min_length = old.checked_add(min_growth).ok_or_else(|| exceeded.clone())?;
    if min_length > max_length {
        Err(exceeded)
    } else if min_length <= soft_max {
        Ok(soft_max)
    } else {
        Ok(min_length)
    }
}
