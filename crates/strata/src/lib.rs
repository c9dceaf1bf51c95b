//! Strata: a growable contiguous array list with an explicit growth policy.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut list = ArrayList::new();
//! assert_eq!(list.capacity(), 0);
//!
//! list.append("a").unwrap();
//! assert_eq!(list.capacity(), GrowthConfig::DEFAULT_CAPACITY);
//!
//! list.insert(0, "b").unwrap();
//! assert_eq!(list.index_of(&"a"), Some(1));
//! assert!(matches!(
//!     list.get(5),
//!     Err(ListError::IndexOutOfRange { index: 5, len: 2 })
//! ));
//!
//! list.trim_to_size();
//! assert_eq!(list.capacity(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Errors, structural versions, growth arithmetic, `GrowthPolicy` |
//! | [`list`] | `strata-list` | `ArrayList`, backing store, iterators, cursors, `GrowthConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, versions, and growth arithmetic (`strata-core`).
///
/// Implement [`types::GrowthPolicy`] to control how lists grow.
pub use strata_core as types;

/// The array list and its supporting types (`strata-list`).
pub use strata_list as list;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use strata_core::{GrowthPolicy, ListError, StructuralVersion};
    pub use strata_list::{ArrayList, Cursor, GrowthConfig};
}
