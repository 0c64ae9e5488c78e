//! Well-known ERC-165 interface identifiers.
//!
//! An interface id is the XOR of the selectors of every function in the interface.

use crate::selector::InterfaceId;

/// ERC-165 itself, i.e. `supportsInterface(bytes4)`.
pub const ERC165_INTERFACE_ID: InterfaceId = InterfaceId::new([0x01, 0xff, 0xc9, 0xa7]);

/// The diamond cut interface.
pub const DIAMOND_CUT_INTERFACE_ID: InterfaceId = InterfaceId::new([0x1f, 0x93, 0x1c, 0x1c]);

/// The diamond loupe interface.
pub const DIAMOND_LOUPE_INTERFACE_ID: InterfaceId = InterfaceId::new([0x48, 0xe2, 0xb0, 0x93]);

/// ERC-173 contract ownership.
pub const ERC173_INTERFACE_ID: InterfaceId = InterfaceId::new([0x7f, 0x58, 0x28, 0xd0]);

/// The id that ERC-165 reserves as "invalid". No contract may claim to support it.
pub const INVALID_INTERFACE_ID: InterfaceId = InterfaceId::new([0xff; 4]);

/// Interfaces that every router supports from construction.
pub const STANDARD_INTERFACES: [InterfaceId; 4] = [
    ERC165_INTERFACE_ID,
    DIAMOND_CUT_INTERFACE_ID,
    DIAMOND_LOUPE_INTERFACE_ID,
    ERC173_INTERFACE_ID,
];

/// Computes the id of the interface made of the functions with the given signatures.
pub fn interface_id<'a>(signatures: impl IntoIterator<Item = &'a str>) -> InterfaceId {
    signatures
        .into_iter()
        .map(crate::selector::selector_of)
        .fold(InterfaceId::ZERO, |acc, selector| acc ^ selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_ids_match_their_functions() {
        assert_eq!(
            interface_id(["supportsInterface(bytes4)"]),
            ERC165_INTERFACE_ID
        );
        assert_eq!(
            interface_id(["diamondCut((address,uint8,bytes4[])[],address,bytes)"]),
            DIAMOND_CUT_INTERFACE_ID
        );
        assert_eq!(
            interface_id([
                "facets()",
                "facetFunctionSelectors(address)",
                "facetAddresses()",
                "facetAddress(bytes4)",
            ]),
            DIAMOND_LOUPE_INTERFACE_ID
        );
        assert_eq!(
            interface_id(["owner()", "transferOwnership(address)"]),
            ERC173_INTERFACE_ID
        );
    }
}
