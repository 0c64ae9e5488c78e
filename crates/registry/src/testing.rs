//! Mock modules for exercising the router.

use std::sync::Arc;

use diamond_primitives::{
    call::Call,
    cut::{FacetCut, InitCall},
    module_ref::ModuleRef,
    selector::Selector,
    Bytes, U256,
};
use parking_lot::Mutex;

use crate::{diamond::Diamond, errors::ModuleError, module::Module};

/// Records every call and returns a fixed payload.
#[derive(Debug, Default)]
pub(crate) struct RecordingModule {
    output: Bytes,
    calls: Mutex<Vec<Call>>,

    /// Number of bound selectors observed at each invocation.
    selector_counts: Mutex<Vec<usize>>,
}

impl RecordingModule {
    pub(crate) fn new(output: impl Into<Bytes>) -> Arc<Self> {
        Arc::new(Self {
            output: output.into(),
            ..Default::default()
        })
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub(crate) fn selector_counts(&self) -> Vec<usize> {
        self.selector_counts.lock().clone()
    }
}

impl Module for RecordingModule {
    fn invoke(&self, router: &mut Diamond, call: &Call) -> Result<Bytes, ModuleError> {
        self.calls.lock().push(call.clone());
        self.selector_counts.lock().push(router.selector_count());

        Ok(self.output.clone())
    }
}

/// Always fails with the given reason.
#[derive(Debug)]
pub(crate) struct RevertingModule {
    reason: String,
}

impl RevertingModule {
    pub(crate) fn new(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            reason: reason.to_string(),
        })
    }
}

impl Module for RevertingModule {
    fn invoke(&self, _router: &mut Diamond, _call: &Call) -> Result<Bytes, ModuleError> {
        Err(ModuleError::revert_with(&self.reason))
    }
}

/// What a reentrant module does once its nested call has returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AfterForward {
    /// Succeed, whatever the outcome of the nested call.
    Succeed,

    /// Fail, whatever the outcome of the nested call.
    Revert,
}

impl AfterForward {
    fn finish(self) -> Result<Bytes, ModuleError> {
        match self {
            AfterForward::Succeed => Ok(Bytes::new()),
            AfterForward::Revert => Err(ModuleError::revert_with("after forward")),
        }
    }
}

/// Cuts the selector table on behalf of its caller.
///
/// A failed cut is propagated; otherwise the module finishes as configured.
#[derive(Debug)]
pub(crate) struct CuttingModule {
    cuts: Vec<FacetCut>,
    after: AfterForward,
}

impl CuttingModule {
    pub(crate) fn new(cuts: Vec<FacetCut>, after: AfterForward) -> Arc<Self> {
        Arc::new(Self { cuts, after })
    }
}

impl Module for CuttingModule {
    fn invoke(&self, router: &mut Diamond, call: &Call) -> Result<Bytes, ModuleError> {
        router.diamond_cut(&call.caller, &self.cuts, &InitCall::none())?;

        self.after.finish()
    }
}

/// Points the router's fallback at a fixed module on behalf of its caller.
#[derive(Debug)]
pub(crate) struct SetFallbackModule {
    fallback: ModuleRef,
}

impl SetFallbackModule {
    pub(crate) fn new(fallback: ModuleRef) -> Arc<Self> {
        Arc::new(Self { fallback })
    }
}

impl Module for SetFallbackModule {
    fn invoke(&self, router: &mut Diamond, call: &Call) -> Result<Bytes, ModuleError> {
        router.set_fallback_address(&call.caller, self.fallback)?;

        Ok(Bytes::new())
    }
}

/// Dispatches a nested call to `selector` with `value` attached, ignoring its outcome.
#[derive(Debug)]
pub(crate) struct ForwardingModule {
    selector: Selector,
    value: U256,
    after: AfterForward,
}

impl ForwardingModule {
    pub(crate) fn new(selector: Selector, value: U256, after: AfterForward) -> Arc<Self> {
        Arc::new(Self {
            selector,
            value,
            after,
        })
    }
}

impl Module for ForwardingModule {
    fn invoke(&self, router: &mut Diamond, call: &Call) -> Result<Bytes, ModuleError> {
        let nested = Call::to_selector(call.caller, self.selector, &[]).with_value(self.value);
        let _ = router.dispatch(&nested);

        self.after.finish()
    }
}
