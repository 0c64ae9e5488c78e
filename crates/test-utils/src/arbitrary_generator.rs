//! Module to generate arbitrary values for testing.

use std::ops::Range;

use diamond_primitives::{
    cut::FacetCut, module_ref::ModuleRef, selector::Selector, Address,
};
use proptest::prelude::*;

/// Generates an arbitrary selector, the all-zero one included.
pub fn arb_selector() -> impl Strategy<Value = Selector> {
    prop_oneof![
        1 => Just(Selector::ZERO),
        9 => any::<[u8; 4]>().prop_map(Selector::from),
    ]
}

/// Generates an arbitrary address.
pub fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// Generates an arbitrary reference to a module, never [`ModuleRef::NONE`].
pub fn arb_module_ref() -> impl Strategy<Value = ModuleRef> {
    arb_address()
        .prop_filter("module must not be NONE", |address| !address.is_zero())
        .prop_map(ModuleRef::new)
}

/// Generates a list of distinct selectors whose length lies in `size`.
pub fn arb_unique_selectors(size: Range<usize>) -> impl Strategy<Value = Vec<Selector>> {
    proptest::collection::btree_set(arb_selector(), size)
        .prop_map(|selectors| selectors.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Generates a canonical function signature such as `transfer(address,uint256)`.
pub fn arb_signature() -> impl Strategy<Value = String> {
    let name = "[a-zA-Z_][a-zA-Z0-9_]{0,15}";
    let arg = prop_oneof![
        Just("address"),
        Just("bool"),
        Just("bytes"),
        Just("bytes4"),
        Just("string"),
        Just("uint256"),
        Just("uint8"),
    ];

    (name, proptest::collection::vec(arg, 0..4))
        .prop_map(|(name, args)| format!("{name}({})", args.join(",")))
}

/// Returns the signatures `fn0()` to `fn{n-1}()`.
pub fn fn_signatures(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("fn{i}()")).collect()
}

/// Generates a batch of `add` cuts that is valid against an empty selector table: every selector
/// appears exactly once across the whole batch.
pub fn arb_add_batch() -> impl Strategy<Value = Vec<FacetCut>> {
    (
        arb_unique_selectors(1..64),
        proptest::collection::vec(arb_module_ref(), 1..5),
    )
        .prop_map(|(selectors, modules)| {
            let chunk_size = selectors.len().div_ceil(modules.len());

            selectors
                .chunks(chunk_size)
                .zip(modules)
                .map(|(chunk, module)| FacetCut::add(module, chunk.to_vec()))
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use diamond_primitives::selector::parse_signature;

    use super::*;

    proptest! {
        #[test]
        fn generated_signatures_are_canonical(signature in arb_signature()) {
            prop_assert!(parse_signature(&signature).is_ok());
        }

        #[test]
        fn add_batches_never_repeat_selectors(batch in arb_add_batch()) {
            let mut seen = HashSet::new();
            for cut in &batch {
                prop_assert!(!cut.selectors.is_empty());
                prop_assert!(cut.target.is_some());
                for selector in &cut.selectors {
                    prop_assert!(seen.insert(*selector));
                }
            }
        }
    }
}
