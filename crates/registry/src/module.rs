//! Implementation modules and the table of addresses that host one.

use std::{collections::HashMap, fmt, sync::Arc};

use diamond_primitives::{call::Call, module_ref::ModuleRef, Bytes};

use crate::{diamond::Diamond, errors::ModuleError};

/// An implementation module that the router forwards calls to.
///
/// A module sees calls exactly as they reached the router, including the original caller and any
/// attached value, and is not aware that it was dispatched to. It gets mutable access to the router
/// it runs in, so it may call back into it (dispatch other operations, cut the selector table, ...)
/// before returning.
pub trait Module: fmt::Debug + Send + Sync {
    /// Handles `call` and returns the opaque result.
    fn invoke(&self, router: &mut Diamond, call: &Call) -> Result<Bytes, ModuleError>;
}

/// The set of addresses that host executable modules.
///
/// Binding a selector to an address that is not in this table is allowed, but dispatching to it
/// fails the same way as dispatching an unbound selector.
#[derive(Clone, Default)]
pub struct ModuleTable {
    modules: HashMap<ModuleRef, Arc<dyn Module>>,
}

impl fmt::Debug for ModuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut addresses = self.modules.keys().collect::<Vec<_>>();
        addresses.sort();

        f.debug_struct("ModuleTable")
            .field("modules", &addresses)
            .finish()
    }
}

impl ModuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `module` at `address`, returning whatever was installed there before.
    ///
    /// Nothing can be installed at [`ModuleRef::NONE`]; such requests are ignored.
    pub fn install(
        &mut self,
        address: ModuleRef,
        module: Arc<dyn Module>,
    ) -> Option<Arc<dyn Module>> {
        if address.is_none() {
            return None;
        }

        self.modules.insert(address, module)
    }

    /// Removes the module at `address`.
    pub fn uninstall(&mut self, address: &ModuleRef) -> Option<Arc<dyn Module>> {
        self.modules.remove(address)
    }

    /// Returns the module at `address`, if there is one.
    pub fn get(&self, address: &ModuleRef) -> Option<Arc<dyn Module>> {
        self.modules.get(address).cloned()
    }

    /// Returns true if `address` hosts a module.
    pub fn has_code(&self, address: &ModuleRef) -> bool {
        self.modules.contains_key(address)
    }
}
