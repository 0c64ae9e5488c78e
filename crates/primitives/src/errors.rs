//! Errors for the diamond primitives.

use thiserror::Error;

/// Error while validating an operation signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature is not of the canonical form `name(type0,type1,...)`.
    #[error("malformed signature: {0:?}")]
    Malformed(String),
}

/// Error while decoding a [`CutAction`](crate::cut::CutAction) from its wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutActionError {
    /// The discriminant does not correspond to any action.
    #[error("unknown cut action {0}, expected 0 (add), 1 (replace) or 2 (remove)")]
    Unknown(u8),
}
