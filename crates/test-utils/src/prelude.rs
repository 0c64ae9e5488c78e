//! Re-exports of the most commonly used strategies.

pub use crate::arbitrary_generator::{
    arb_add_batch, arb_address, arb_module_ref, arb_selector, arb_signature, arb_unique_selectors,
    fn_signatures,
};
