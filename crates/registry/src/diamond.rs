//! The router: dispatches calls through the selector table and maintains it.

use std::sync::Arc;

use diamond_enumerable::EnumerableSet;
use diamond_primitives::{
    call::Call,
    cut::{Facet, FacetCut, InitCall},
    interface::{INVALID_INTERFACE_ID, STANDARD_INTERFACES},
    module_ref::ModuleRef,
    selector::{InterfaceId, Selector},
    Address, Bytes, U256,
};
use tracing::{debug, info, trace, warn};

use crate::{
    access::{Authorizer, SafeOwnable},
    errors::RegistryError,
    module::{Module, ModuleTable},
    registry::{CutReceipt, FacetRegistry},
};

/// Maximum number of module invocations that may be running at once.
///
/// The invocation that would exceed it fails with [`RegistryError::CallDepthExceeded`] before any
/// module code runs.
pub const MAX_CALL_DEPTH: usize = 1024;

/// Everything a failed invocation has to roll back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiamondState {
    registry: FacetRegistry,
    ownership: SafeOwnable,
    fallback: ModuleRef,
    interfaces: EnumerableSet<InterfaceId>,
    balance: U256,
}

impl DiamondState {
    fn new(owner: Address) -> Self {
        Self {
            registry: FacetRegistry::new(),
            ownership: SafeOwnable::new(owner),
            fallback: ModuleRef::NONE,
            interfaces: STANDARD_INTERFACES.into_iter().collect(),
            balance: U256::ZERO,
        }
    }
}

/// A router that forwards every call to the module bound to the call's selector.
///
/// Modules run with mutable access to the router and may call back into it. Each module
/// invocation runs in a frame: if the invocation fails, every change it made to the router state
/// (including changes made by nested invocations) is discarded.
///
/// Snapshots are taken lazily. The first write inside a frame copies the state once, and that copy
/// is shared by every frame opened since the previous write.
#[derive(Debug)]
pub struct Diamond {
    state: DiamondState,
    modules: ModuleTable,

    /// One entry per running invocation, innermost last. `None` until the state is first written
    /// within the frame.
    frames: Vec<Option<Arc<DiamondState>>>,
}

impl Diamond {
    /// Creates a router owned by `owner` with an empty selector table.
    pub fn new(owner: Address) -> Self {
        Self::with_modules(owner, ModuleTable::new())
    }

    /// Creates a router owned by `owner` that can dispatch to the given modules.
    pub fn with_modules(owner: Address, modules: ModuleTable) -> Self {
        Self {
            state: DiamondState::new(owner),
            modules,
            frames: Vec::new(),
        }
    }

    /// Makes `module` callable at `address`.
    ///
    /// Module code lives outside of the router state and is not affected by rollbacks.
    pub fn install_module(&mut self, address: ModuleRef, module: Arc<dyn Module>) {
        debug!(%address, ?module, "installing module");
        self.modules.install(address, module);
    }

    /// Returns the modules this router can dispatch to.
    pub const fn modules(&self) -> &ModuleTable {
        &self.modules
    }

    /// Returns the current state.
    pub const fn state(&self) -> &DiamondState {
        &self.state
    }

    /// Returns the selector table.
    pub const fn registry(&self) -> &FacetRegistry {
        &self.state.registry
    }

    /// Forwards `call` to the module bound to its selector and returns that module's result.
    ///
    /// A call without payload is a plain value transfer and only credits the router. Unbound
    /// selectors go to the fallback module if one is set. Any failure, including one of the
    /// module, leaves the router as it was before the call.
    pub fn dispatch(&mut self, call: &Call) -> Result<Bytes, RegistryError> {
        if call.is_plain_transfer() {
            self.receive(call.value);
            return Ok(Bytes::new());
        }

        let selector = call.selector();
        let mut target = self.state.registry.facet_address(&selector);
        if target.is_none() {
            target = self.state.fallback;
        }

        let Some(module) = self.modules.get(&target) else {
            debug!(%selector, %target, "no implementation found");
            return Err(RegistryError::NoImplementationFound { selector });
        };

        let depth = self.frames.len();
        trace!(%selector, %target, caller = %call.caller, depth, "dispatching call");

        self.in_frame(|router| {
            router.credit(call.value);

            module
                .invoke(router, call)
                .map_err(|source| RegistryError::Module {
                    module: target,
                    source,
                })
        })
    }

    /// Applies `cuts` on behalf of `caller`, then runs `init` if it is not empty.
    ///
    /// The initialization call is forwarded to its target like a regular dispatch and sees the
    /// selector table with every cut applied. If any cut or the initialization fails, the router is
    /// left as it was before this call.
    pub fn diamond_cut(
        &mut self,
        caller: &Address,
        cuts: &[FacetCut],
        init: &InitCall,
    ) -> Result<CutReceipt, RegistryError> {
        if !self.state.ownership.is_authorized(caller) {
            warn!(%caller, "unauthorized diamond cut");
            return Err(RegistryError::NotAuthorized { caller: *caller });
        }

        let init_module = self.init_module(init)?;

        self.in_frame(|router| {
            let state = router.write_state();
            let receipt = state
                .registry
                .apply_batch(&state.ownership, caller, cuts)?;

            if let Some(module) = init_module {
                debug!(target = %init.target, "running initialization");

                let call = Call::new(*caller, init.calldata.clone());
                module
                    .invoke(router, &call)
                    .map_err(|source| RegistryError::Module {
                        module: init.target,
                        source,
                    })?;
            }

            Ok(receipt)
        })
    }

    fn init_module(&self, init: &InitCall) -> Result<Option<Arc<dyn Module>>, RegistryError> {
        if init.target.is_none() != init.calldata.is_empty() {
            return Err(RegistryError::InvalidInitialization);
        }

        if init.is_empty() {
            return Ok(None);
        }

        self.modules
            .get(&init.target)
            .map(Some)
            .ok_or(RegistryError::InitTargetHasNoCode {
                target: init.target,
            })
    }

    /// Accepts a plain value transfer.
    pub fn receive(&mut self, value: U256) {
        trace!(%value, "received value");
        self.credit(value);
    }

    /// Returns the value held by the router.
    pub const fn balance(&self) -> U256 {
        self.state.balance
    }

    fn credit(&mut self, value: U256) {
        if value.is_zero() {
            return;
        }

        let state = self.write_state();
        state.balance = state.balance.saturating_add(value);
    }

    /// Returns the module that serves unbound selectors, or [`ModuleRef::NONE`].
    pub const fn fallback_address(&self) -> ModuleRef {
        self.state.fallback
    }

    /// Sets the module that serves unbound selectors. Owner only.
    ///
    /// [`ModuleRef::NONE`] disables the fallback.
    pub fn set_fallback_address(
        &mut self,
        caller: &Address,
        fallback: ModuleRef,
    ) -> Result<(), RegistryError> {
        self.state.ownership.ensure_owner(caller)?;

        info!(%fallback, "fallback module updated");
        self.write_state().fallback = fallback;

        Ok(())
    }

    /// Returns true if the router claims to implement the interface `id` as per ERC-165.
    pub fn supports_interface(&self, id: &InterfaceId) -> bool {
        *id != INVALID_INTERFACE_ID && self.state.interfaces.contains(id)
    }

    /// Returns every interface the router claims to implement.
    pub fn supported_interfaces(&self) -> &[InterfaceId] {
        self.state.interfaces.as_slice()
    }

    /// Declares whether the router implements the interface `id`. Owner only.
    ///
    /// `0xffffffff` is rejected with [`RegistryError::InvalidInterfaceId`].
    pub fn set_supports_interface(
        &mut self,
        caller: &Address,
        id: InterfaceId,
        supported: bool,
    ) -> Result<(), RegistryError> {
        self.state.ownership.ensure_owner(caller)?;

        if id == INVALID_INTERFACE_ID {
            return Err(RegistryError::InvalidInterfaceId { id });
        }

        info!(%id, %supported, "interface support updated");

        let interfaces = &mut self.write_state().interfaces;
        if supported {
            interfaces.insert(id);
        } else {
            interfaces.remove(&id);
        }

        Ok(())
    }

    /// Returns the owner of the router.
    pub const fn owner(&self) -> Address {
        self.state.ownership.owner()
    }

    /// Returns the nominated next owner, if any.
    pub const fn nominee(&self) -> Option<Address> {
        self.state.ownership.nominee()
    }

    /// Nominates `nominee` as the next owner. Owner only.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        nominee: Address,
    ) -> Result<(), RegistryError> {
        self.state.ownership.ensure_owner(caller)?;
        self.write_state()
            .ownership
            .transfer_ownership(caller, nominee)
    }

    /// Makes the nominee the owner. Nominee only.
    pub fn accept_ownership(&mut self, caller: &Address) -> Result<(), RegistryError> {
        if self.state.ownership.nominee() != Some(*caller) {
            return Err(RegistryError::NotNominee { caller: *caller });
        }

        self.write_state().ownership.accept_ownership(caller)
    }

    /// Returns the module bound to `selector`, or [`ModuleRef::NONE`].
    pub fn facet_address(&self, selector: &Selector) -> ModuleRef {
        self.state.registry.facet_address(selector)
    }

    /// Returns the selectors bound to `module`.
    pub fn facet_function_selectors(&self, module: &ModuleRef) -> &[Selector] {
        self.state.registry.facet_function_selectors(module)
    }

    /// Returns every module that serves at least one selector.
    pub fn facet_addresses(&self) -> &[ModuleRef] {
        self.state.registry.facet_addresses()
    }

    /// Returns every module together with its selectors.
    pub fn facets(&self) -> Vec<Facet> {
        self.state.registry.facets()
    }

    /// Returns the number of bound selectors.
    pub fn selector_count(&self) -> usize {
        self.state.registry.selector_count()
    }

    /// Runs `f` in a new frame, restoring the state as of the start of the frame if `f` fails.
    ///
    /// Fails without running `f` if [`MAX_CALL_DEPTH`] frames are already open.
    fn in_frame<T, F>(&mut self, f: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<T, RegistryError>,
    {
        let depth = self.frames.len();
        if depth >= MAX_CALL_DEPTH {
            debug!(depth, "call depth exceeded");
            return Err(RegistryError::CallDepthExceeded { depth });
        }

        self.frames.push(None);
        let res = f(self);
        let snapshot = self.frames.pop().flatten();

        if res.is_err() {
            if let Some(snapshot) = snapshot {
                trace!(depth = self.frames.len(), "rolling back frame");
                self.state = Arc::unwrap_or_clone(snapshot);
            }
        }

        res
    }

    /// Returns the state for writing, snapshotting it first for every frame that has not done so
    /// yet.
    fn write_state(&mut self) -> &mut DiamondState {
        let mut snapshot = None;

        // frames that already hold a snapshot always form a prefix of the stack.
        for frame in self.frames.iter_mut().rev() {
            if frame.is_some() {
                break;
            }

            let shared = snapshot.get_or_insert_with(|| Arc::new(self.state.clone()));
            *frame = Some(Arc::clone(shared));
        }

        &mut self.state
    }
}
