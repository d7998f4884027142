use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the fallible [`IntList`](crate::IntList) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index did not refer to a live element.
    #[error("length is {len} but index is {index}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// The allocator could not provide storage for the requested number of elements.
    #[error("failed to allocate storage for {requested} elements")]
    Allocation {
        /// The capacity that was requested.
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Computing a new capacity overflowed `usize`.
    #[error("capacity computation overflowed")]
    CapacityOverflow,
}
