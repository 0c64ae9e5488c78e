//! Errors for the router parameters.

use diamond_primitives::errors::SignatureError;
use thiserror::Error;

/// Error while turning parameters into cuts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// A function signature is not canonical.
    #[error(transparent)]
    MalformedSignature(#[from] SignatureError),

    /// A facet or cut that binds selectors does not say to which module.
    #[error("{0} has no target module")]
    MissingTarget(String),

    /// A removal names a target module, which removals must not do.
    #[error("{0} removes selectors but names a target module")]
    UnexpectedTarget(String),
}
