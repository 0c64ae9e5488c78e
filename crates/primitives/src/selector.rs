//! Operation selectors and how they are derived from human-readable signatures.

use alloy_primitives::{keccak256, FixedBytes};

use crate::errors::SignatureError;

/// The 4-byte identifier of an operation.
///
/// The registry treats a selector as an opaque bit pattern. In particular, the all-zero selector is
/// an ordinary, bindable value.
pub type Selector = alloy_primitives::Selector;

/// The 4-byte identifier of an interface as per ERC-165.
pub type InterfaceId = FixedBytes<4>;

/// Size of a [`Selector`] in bytes.
pub const SELECTOR_SIZE: usize = 4;

/// Computes the selector of an operation from its canonical signature, i.e. the first four bytes
/// of the keccak256 hash of the signature.
///
/// No validation is performed; see [`parse_signature`] for that.
pub fn selector_of(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());

    Selector::from_slice(&hash[..SELECTOR_SIZE])
}

/// Validates a canonical signature of the form `name(type0,type1,...)` and returns its selector.
///
/// Whitespace is not permitted anywhere in a canonical signature since it changes the resulting
/// hash.
pub fn parse_signature(signature: &str) -> Result<Selector, SignatureError> {
    let malformed = || SignatureError::Malformed(signature.to_string());

    if signature.chars().any(char::is_whitespace) {
        return Err(malformed());
    }

    let (name, rest) = signature.split_once('(').ok_or_else(malformed)?;
    let args = rest.strip_suffix(')').ok_or_else(malformed)?;

    let mut chars = name.chars();
    let valid_head = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if !valid_head || !valid_tail {
        return Err(malformed());
    }

    // parentheses in the argument list belong to tuple types and must balance.
    let mut depth = 0usize;
    for c in args.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or_else(malformed)?,
            _ => {}
        }
    }
    if depth != 0 {
        return Err(malformed());
    }

    Ok(selector_of(signature))
}

/// Extracts the selector from raw calldata.
///
/// Calldata shorter than four bytes is right-padded with zeroes, the same way the EVM exposes
/// `msg.sig`.
pub fn selector_from_calldata(calldata: &[u8]) -> Selector {
    let mut sig = [0u8; SELECTOR_SIZE];
    let len = calldata.len().min(SELECTOR_SIZE);
    sig[..len].copy_from_slice(&calldata[..len]);

    Selector::from(sig)
}
