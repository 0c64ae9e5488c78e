//! Default values for the router parameters.

use diamond_primitives::{module_ref::ModuleRef, Address};

/// Default owner: the first well-known account of local development chains.
pub(crate) const DEFAULT_OWNER: Address = Address::new([
    0xf3, 0x9f, 0xd6, 0xe5, 0x1a, 0xad, 0x88, 0xf6, 0xf4, 0xce, 0x6a, 0xb8, 0x82, 0x72, 0x79, 0xcf,
    0xff, 0xb9, 0x22, 0x66,
]);

/// By default, unbound selectors are not served by anything.
pub(crate) const DEFAULT_FALLBACK: ModuleRef = ModuleRef::NONE;
