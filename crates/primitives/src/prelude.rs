//! Just import this if you want a no-brainer `use` statement to get the most of the primitives.

pub use crate::{
    call::Call,
    cut::{CutAction, Facet, FacetCut, InitCall},
    errors::{CutActionError, SignatureError},
    interface::{interface_id, STANDARD_INTERFACES},
    module_ref::ModuleRef,
    selector::{parse_signature, selector_from_calldata, selector_of, InterfaceId, Selector},
    Address, Bytes, U256,
};
