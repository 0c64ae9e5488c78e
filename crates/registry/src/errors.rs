//! Errors that can occur while mutating the selector table or dispatching through it.

use diamond_primitives::{
    cut::CutAction,
    module_ref::ModuleRef,
    selector::{InterfaceId, Selector},
    Address, Bytes,
};
use thiserror::Error;

/// Unified error type for everything the router can reject.
///
/// Every variant is a synchronous rejection of the current invocation. By the time one of these is
/// returned, all effects of the invocation have been discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The caller is not permitted to perform the operation.
    #[error("caller {caller} is not authorized")]
    NotAuthorized {
        /// The rejected caller.
        caller: Address,
    },

    /// An `add` named a selector that is already bound.
    #[error("selector {selector} is already bound to {module}")]
    AlreadyBound {
        /// The offending selector.
        selector: Selector,

        /// The module the selector is currently bound to.
        module: ModuleRef,
    },

    /// A `replace` or `remove` named a selector that is not bound.
    #[error("selector {selector} is not bound")]
    NotBound {
        /// The offending selector.
        selector: Selector,
    },

    /// The target of a cut is [`ModuleRef::NONE`] where a module is required, or vice versa.
    #[error("invalid target {target} for {action} cut")]
    InvalidTarget {
        /// The action of the offending cut.
        action: CutAction,

        /// The offending target.
        target: ModuleRef,
    },

    /// A `replace` targets the module that already serves the selector.
    #[error("selector {selector} is already served by {module}")]
    IdenticalReplacement {
        /// The offending selector.
        selector: Selector,

        /// The module named both as current and as new owner.
        module: ModuleRef,
    },

    /// A cut names no selectors at all.
    #[error("cut #{index} does not specify any selector")]
    EmptySelectorList {
        /// Position of the offending cut within its batch.
        index: usize,
    },

    /// No module can serve the selector.
    ///
    /// This is returned both when the selector is unbound and when it is bound to an address that
    /// hosts no module, so callers cannot tell the two apart.
    #[error("no implementation found for selector {selector}")]
    NoImplementationFound {
        /// The requested selector.
        selector: Selector,
    },

    /// Exactly one of the target and the payload of an initialization call is empty.
    #[error("initialization target and calldata must both be empty or both be set")]
    InvalidInitialization,

    /// The initialization target hosts no module.
    #[error("initialization target {target} has no code")]
    InitTargetHasNoCode {
        /// The initialization target.
        target: ModuleRef,
    },

    /// Only the nominated owner can accept ownership.
    #[error("caller {caller} is not the nominated owner")]
    NotNominee {
        /// The rejected caller.
        caller: Address,
    },

    /// `0xffffffff` is reserved by ERC-165 and can never be declared as supported.
    #[error("interface id {id} is reserved")]
    InvalidInterfaceId {
        /// The rejected interface id.
        id: InterfaceId,
    },

    /// Nested invocations went deeper than [`MAX_CALL_DEPTH`](crate::diamond::MAX_CALL_DEPTH).
    #[error("call depth {depth} exceeded")]
    CallDepthExceeded {
        /// Number of invocations already running.
        depth: usize,
    },

    /// The module serving the call failed.
    #[error("module {module} failed: {source}")]
    Module {
        /// The module that was invoked.
        module: ModuleRef,

        /// What the module reported.
        #[source]
        source: ModuleError,
    },
}

/// Failure reported by a module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// The module rejected the call with the given payload.
    #[error("reverted with {0}")]
    Revert(Bytes),

    /// A call the module made back into the router failed.
    #[error("nested router call failed: {0}")]
    Router(Box<RegistryError>),
}

impl ModuleError {
    /// Creates a revert carrying a human-readable reason.
    pub fn revert_with(reason: &str) -> Self {
        ModuleError::Revert(Bytes::copy_from_slice(reason.as_bytes()))
    }
}

impl From<RegistryError> for ModuleError {
    fn from(err: RegistryError) -> Self {
        ModuleError::Router(Box::new(err))
    }
}

/// Inconsistency between the structures that make up the selector table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The slot occupancies do not add up to the recorded selector count.
    #[error("slot occupancy sums to {occupied} but {count} selectors are recorded")]
    OccupancyMismatch {
        /// Sum of the slot occupancies.
        occupied: usize,

        /// Recorded number of selectors.
        count: usize,
    },

    /// More or fewer slots are in use than the selector count requires.
    #[error("{slots} slots in use for {count} selectors")]
    SlotCountMismatch {
        /// Slots in use.
        slots: usize,

        /// Recorded number of selectors.
        count: usize,
    },

    /// A slot other than the last one has a free lane.
    #[error("slot {index} is not full but is not the last slot")]
    PartialSlot {
        /// Index of the offending slot.
        index: usize,
    },

    /// The forward index, the slot store and the reverse index hold different numbers of
    /// selectors.
    #[error("{bindings} bindings, {slotted} slotted selectors, {indexed} indexed selectors")]
    SizeMismatch {
        /// Entries in the forward index.
        bindings: usize,

        /// Selectors in the slot store.
        slotted: usize,

        /// Selectors in the reverse index.
        indexed: usize,
    },

    /// A selector is bound to [`ModuleRef::NONE`].
    #[error("selector {selector} bound to NONE")]
    BoundToNone {
        /// The offending selector.
        selector: Selector,
    },

    /// A binding points at a slot position that holds another selector.
    #[error("selector {selector} not found at slot position {position}")]
    Misplaced {
        /// The offending selector.
        selector: Selector,

        /// The position recorded in its binding.
        position: usize,
    },

    /// A bound selector is missing from the selector list of its module.
    #[error("selector {selector} missing from the list of {module}")]
    NotIndexed {
        /// The offending selector.
        selector: Selector,

        /// The module it is bound to.
        module: ModuleRef,
    },
}
