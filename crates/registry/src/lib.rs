//! # Diamond Registry
//!
//! A router that serves every operation of a modular application by forwarding each call to the
//! implementation module ("facet") bound to the call's 4-byte selector.
//!
//! The binding table can be changed after construction by the owner, through batches of cuts that
//! add, replace or remove bindings. A batch is applied atomically: either every cut succeeds and
//! the optional initialization call that follows does too, or nothing changes at all.
//!
//! The table is made of three structures that are kept consistent at all times:
//!
//! - a forward index from selectors to modules, used by the dispatcher;
//! - a reverse index from modules to their selectors, used for enumeration ("loupe");
//! - a slot-packed list of every selector, grouping selectors eight at a time so that bulk
//!   mutations write as few slots as possible.
//!
//! Modules are invoked with mutable access to the router and may call back into it. Effects of a
//! failed invocation, nested ones included, are rolled back.

pub mod access;
pub mod diamond;
pub mod errors;
mod facet_index;
pub mod module;
pub mod prelude;
pub mod registry;
pub mod slots;

#[cfg(test)]
mod testing;

pub use diamond::Diamond;
pub use errors::{InvariantViolation, ModuleError, RegistryError};
pub use registry::{CutReceipt, FacetRegistry};
