//! This crate provides test-utilities shared by the crates of the workspace.
//!
//! These are mostly `proptest` strategies for the primitive types, since implementing `Arbitrary`
//! for types defined in external crates is not possible due to the orphan rule.

pub mod arbitrary_generator;
pub mod prelude;
