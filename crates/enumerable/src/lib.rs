//! Enumerable collections with constant-time insertion, removal and positional lookup.
//!
//! All collections here share the same layout: a dense vector holding the elements plus a table
//! mapping each element to its position in that vector. Removal swaps the last element into the
//! vacated position and fixes up that single element's recorded position. Emptiness is derived
//! from the vector length, never from a sentinel element value, so every value of the element type
//! (including all-zero ones) can be stored.
//!
//! - [`EnumerableSet`]: the building block, e.g. the selectors served by one module.
//! - [`EnumerableMap`]: the same with a value attached to each key.
//! - [`OwnershipIndex`]: per-owner and global enumeration of items such as token ids.

pub mod errors;
pub mod map;
pub mod ownership;
pub mod set;

pub use errors::EnumerableError;
pub use map::EnumerableMap;
pub use ownership::OwnershipIndex;
pub use set::EnumerableSet;
