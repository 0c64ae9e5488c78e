//! Just import this if you want a no-brainer `use` statement to get the most of the registry.

pub use crate::{
    access::{Authorizer, SafeOwnable},
    diamond::{Diamond, DiamondState, MAX_CALL_DEPTH},
    errors::{InvariantViolation, ModuleError, RegistryError},
    module::{Module, ModuleTable},
    registry::{CutReceipt, FacetRegistry},
    slots::{SelectorSlot, SelectorSlots, SLOT_CAPACITY},
};
