//! Reverse index from modules to the selectors they serve.

use std::collections::HashMap;

use diamond_enumerable::EnumerableSet;
use diamond_primitives::{cut::Facet, module_ref::ModuleRef, selector::Selector};

/// For each module, the ordered set of selectors currently bound to it.
///
/// Modules are themselves kept in an [`EnumerableSet`] so that enumeration is deterministic. A
/// module appears in the index exactly as long as it has at least one selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FacetIndex {
    modules: EnumerableSet<ModuleRef>,
    selectors: HashMap<ModuleRef, EnumerableSet<Selector>>,
}

impl FacetIndex {
    /// Appends `selector` to `module`'s list.
    pub(crate) fn insert(&mut self, module: ModuleRef, selector: Selector) {
        let inserted = self.selectors.entry(module).or_default().insert(selector);
        debug_assert!(inserted, "selector {selector} already listed under {module}");

        self.modules.insert(module);
    }

    /// Removes `selector` from `module`'s list, dropping the module once it serves nothing.
    pub(crate) fn remove(&mut self, module: &ModuleRef, selector: &Selector) {
        let Some(selectors) = self.selectors.get_mut(module) else {
            debug_assert!(false, "module {module} not indexed");
            return;
        };

        let removed = selectors.remove(selector);
        debug_assert!(removed, "selector {selector} not listed under {module}");

        if selectors.is_empty() {
            self.selectors.remove(module);
            self.modules.remove(module);
        }
    }

    /// Returns the selectors bound to `module` in reverse-index order.
    pub(crate) fn selectors_of(&self, module: &ModuleRef) -> &[Selector] {
        self.selectors
            .get(module)
            .map(EnumerableSet::as_slice)
            .unwrap_or_default()
    }

    /// Returns the position of `selector` within `module`'s list.
    pub(crate) fn position(&self, module: &ModuleRef, selector: &Selector) -> Option<usize> {
        self.selectors.get(module)?.position(selector)
    }

    /// Returns every module that serves at least one selector.
    pub(crate) fn modules(&self) -> &[ModuleRef] {
        self.modules.as_slice()
    }

    /// Returns every module together with its selectors.
    pub(crate) fn facets(&self) -> Vec<Facet> {
        self.modules
            .iter()
            .map(|module| Facet {
                address: *module,
                selectors: self.selectors_of(module).to_vec(),
            })
            .collect()
    }

    /// Total number of (module, selector) pairs.
    pub(crate) fn binding_count(&self) -> usize {
        self.selectors.values().map(EnumerableSet::len).sum()
    }
}
