//! Benchmark workloads for the Strata array list.
//!
//! - [`op_sequence`]: a seeded, reproducible mix of list operations
//! - [`apply`]: replay such a sequence against any [`ArrayList`]
//! - [`filled`]: a list of `n` sequential integers under a given policy

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::{GrowthPolicy, ListError};
use strata_list::ArrayList;

/// One step of a benchmark workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOp {
    /// Append the value at the end.
    Append(u64),
    /// Insert at `position % (len + 1)`.
    Insert { position: usize, value: u64 },
    /// Remove at `position % len`; skipped on an empty list.
    Remove { position: usize },
    /// Search for the value.
    Find(u64),
}

/// Generate `count` operations from `seed`.
///
/// Roughly half are appends, so lists built from a sequence trend longer.
/// Values are drawn from a small range to give searches a fair hit rate.
pub fn op_sequence(seed: u64, count: usize) -> Vec<ListOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let position = rng.next_u32() as usize;
            let value = rng.next_u64() % 1024;
            match rng.next_u32() % 8 {
                0..=3 => ListOp::Append(value),
                4 | 5 => ListOp::Insert { position, value },
                6 => ListOp::Remove { position },
                _ => ListOp::Find(value),
            }
        })
        .collect()
}

/// Replay `ops` against `list`, returning the number of searches that hit.
///
/// # Errors
///
/// Propagates [`ListError::CapacityExceeded`] from growth.
pub fn apply<P: GrowthPolicy>(
    list: &mut ArrayList<u64, P>,
    ops: &[ListOp],
) -> Result<usize, ListError> {
    let mut hits = 0;
    for op in ops {
        match *op {
            ListOp::Append(value) => list.append(value)?,
            ListOp::Insert { position, value } => {
                list.insert(position % (list.len() + 1), value)?;
            }
            ListOp::Remove { position } => {
                if !list.is_empty() {
                    list.remove(position % list.len())?;
                }
            }
            ListOp::Find(value) => {
                if list.contains(&value) {
                    hits += 1;
                }
            }
        }
    }
    Ok(hits)
}

/// A list holding `0..n` under `policy`, grown one append at a time.
///
/// # Errors
///
/// Propagates [`ListError::CapacityExceeded`] from growth.
pub fn filled<P: GrowthPolicy>(n: u64, policy: P) -> Result<ArrayList<u64, P>, ListError> {
    let mut list = ArrayList::with_policy(policy);
    for i in 0..n {
        list.append(i)?;
    }
    Ok(list)
}
