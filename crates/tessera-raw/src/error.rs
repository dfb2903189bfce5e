//! Allocation error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors that can occur while acquiring slot storage.
///
/// This is the only error a tessera container ever reports. Misuse such as
/// out-of-range positions is a contract violation and panics instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested slot count cannot be expressed as a valid layout
    /// (byte size exceeds `isize::MAX`, or the count itself overflowed).
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The global allocator could not satisfy the request.
    OutOfMemory {
        /// Layout that was refused.
        layout: Layout,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
            Self::OutOfMemory { layout } => {
                write!(
                    f,
                    "out of memory: allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
        }
    }
}

impl Error for AllocError {}

/// Terminate the infallible path of an operation that failed to allocate.
///
/// Capacity overflow panics. Allocator failure is forwarded to
/// [`std::alloc::handle_alloc_error`], which aborts by default.
#[cold]
#[track_caller]
pub fn handle_alloc_failure(err: AllocError) -> ! {
    match err {
        AllocError::CapacityOverflow { .. } => panic!("capacity overflow"),
        AllocError::OutOfMemory { layout } => std::alloc::handle_alloc_error(layout),
    }
}
