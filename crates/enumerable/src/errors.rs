//! Errors that can occur when querying or mutating an enumerable collection.

use thiserror::Error;

/// Errors that can occur when querying or mutating an enumerable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnumerableError {
    /// The requested position is not occupied.
    #[error("index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,

        /// The number of elements in the collection.
        len: usize,
    },

    /// The item is already tracked.
    #[error("item is already tracked")]
    ItemExists,

    /// The item is not tracked.
    #[error("item is not tracked")]
    ItemNotFound,

    /// The item is tracked, but under a different owner.
    #[error("item is held by a different owner")]
    NotOwner,
}
