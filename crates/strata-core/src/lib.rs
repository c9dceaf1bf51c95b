//! Core types and traits for the Strata array list.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces every other Strata crate agrees on: the error enum, the
//! structural version counter, the [`GrowthPolicy`] trait, and the pure
//! integer arithmetic that decides how far a backing buffer grows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod growth;
pub mod traits;
pub mod version;

pub use error::ListError;
pub use growth::SOFT_MAX_HEADROOM;
pub use traits::GrowthPolicy;
pub use version::StructuralVersion;
