//! External invocations of the router.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::selector::{selector_from_calldata, Selector};

/// An invocation of the router as seen by the dispatcher and, unchanged, by the module it is
/// forwarded to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// The account that made the invocation.
    pub caller: Address,

    /// The value attached to the invocation.
    pub value: U256,

    /// The raw payload. The first four bytes select the operation.
    pub calldata: Bytes,
}

impl Call {
    /// Creates a call without any attached value.
    pub fn new(caller: Address, calldata: impl Into<Bytes>) -> Self {
        Self {
            caller,
            value: U256::ZERO,
            calldata: calldata.into(),
        }
    }

    /// Creates a call for `selector` followed by `args`.
    pub fn to_selector(caller: Address, selector: Selector, args: &[u8]) -> Self {
        let mut calldata = Vec::with_capacity(selector.len() + args.len());
        calldata.extend_from_slice(selector.as_slice());
        calldata.extend_from_slice(args);

        Self::new(caller, calldata)
    }

    /// Attaches `value` to the call.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// The selector of the requested operation.
    pub fn selector(&self) -> Selector {
        selector_from_calldata(&self.calldata)
    }

    /// The arguments following the selector.
    pub fn args(&self) -> &[u8] {
        self.calldata.get(4..).unwrap_or_default()
    }

    /// Returns true if the call carries no payload, i.e. it is a plain value transfer.
    pub fn is_plain_transfer(&self) -> bool {
        self.calldata.is_empty()
    }
}
