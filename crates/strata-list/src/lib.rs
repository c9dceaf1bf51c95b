//! Growable contiguous array list with an explicit growth policy.
//!
//! Provides [`ArrayList`], an ordered sequence backed by a single slot
//! buffer that is replaced, never resized in place, whenever its capacity
//! has to change. This crate contains no `unsafe` code: unused slots are
//! `None` rather than uninitialised memory.
//!
//! # Architecture
//!
//! ```text
//! ArrayList<E, P> (orchestrator)
//! ├── BackingStore<E>
//! │   ├── Unallocated { deferred: false }  explicit-empty
//! │   ├── Unallocated { deferred: true }   inflates to default capacity
//! │   └── Allocated(Box<[Option<E>]>)      live prefix + unused tail
//! ├── P: GrowthPolicy (GrowthConfig by default: 10, then +50%)
//! ├── len
//! └── StructuralVersion (checked by Cursor)
//! ```
//!
//! # Growth
//!
//! Every operation that may increase the length asks whether capacity
//! suffices. If not, [`ArrayList::next_capacity`] consults the policy, the
//! store allocates a replacement, the live prefix moves across, and the
//! mutation proceeds. Allocation happens before anything moves, so a
//! failed growth leaves the list exactly as it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod iter;
pub mod list;
pub mod store;

// Public re-exports for the primary API surface.
pub use config::{ConfigError, GrowthConfig};
pub use cursor::Cursor;
pub use iter::{IntoIter, Iter};
pub use list::ArrayList;
pub use store::BackingStore;
