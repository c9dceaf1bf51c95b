//! Error types for the Strata array list.
//!
//! One enum covers every failure a list operation can report. Growth
//! failures and argument failures share it so callers can propagate
//! any list error with a single `?`.

use std::error::Error;
use std::fmt;

use crate::version::StructuralVersion;

/// Errors returned by array list construction, access, and mutation.
///
/// Every variant is reported before the list is touched: an operation
/// that returns `Err` leaves length, capacity, contents and version
/// exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A negative initial capacity was requested.
    InvalidArgument {
        /// The requested capacity as received.
        requested: i64,
    },
    /// A source sequence was required but absent.
    NullReference,
    /// An index fell outside the range valid for the operation.
    ///
    /// For reads, replacements and removals the valid range is
    /// `0..len`; for insertion it is `0..=len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements when the access was attempted.
        len: usize,
    },
    /// Growth demand exceeds the largest representable or allocatable length.
    ///
    /// Equivalent to out-of-memory rather than a logic error.
    CapacityExceeded {
        /// Capacity before the failed growth.
        current: usize,
        /// Number of additional slots that were required.
        min_growth: usize,
    },
    /// The list was structurally modified while a cursor was traversing it.
    ConcurrentModification {
        /// Version recorded by the cursor.
        expected: StructuralVersion,
        /// Version observed on the list.
        found: StructuralVersion,
    },
    /// A cursor was asked to remove an element it has not returned.
    NoCurrentElement,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { requested } => {
                write!(f, "illegal capacity: {requested}")
            }
            Self::NullReference => write!(f, "source sequence is absent"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::CapacityExceeded {
                current,
                min_growth,
            } => {
                write!(
                    f,
                    "required length {current} + {min_growth} exceeds the maximum capacity"
                )
            }
            Self::ConcurrentModification { expected, found } => {
                write!(
                    f,
                    "list modified during traversal: expected version {expected}, found {found}"
                )
            }
            Self::NoCurrentElement => write!(f, "cursor has no current element to remove"),
        }
    }
}

impl Error for ListError {}
