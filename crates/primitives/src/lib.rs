//! This crate contains the types shared by every other crate in the diamond workspace: selectors,
//! module references, cut requests and invocations.
//!
//! It lies at the bottom of the crate hierarchy in this workspace i.e., it does not depend on any
//! other crate in this workspace.

pub mod call;
pub mod cut;
pub mod errors;
pub mod interface;
pub mod module_ref;
pub mod prelude;
pub mod selector;

// Re-exported so that downstream crates agree on a single version of the address/bytes types.
pub use alloy_primitives::{Address, Bytes, U256};
