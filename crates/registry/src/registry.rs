//! The selector table: forward index, reverse index and slot store, mutated only in atomic
//! batches.

use std::collections::HashMap;

use diamond_primitives::{
    cut::{CutAction, Facet, FacetCut},
    module_ref::ModuleRef,
    selector::Selector,
    Address,
};
use tracing::{debug, info, trace, warn};

use crate::{
    access::Authorizer,
    errors::{InvariantViolation, RegistryError},
    facet_index::FacetIndex,
    slots::{SelectorSlot, SelectorSlots},
};

/// Where a bound selector is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Binding {
    /// The module serving the selector. Never [`ModuleRef::NONE`].
    module: ModuleRef,

    /// The position of the selector in the slot store.
    slot_position: usize,
}

/// Summary of a committed batch of cuts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutReceipt {
    /// Number of selectors newly bound.
    pub added: usize,

    /// Number of selectors moved to a different module.
    pub replaced: usize,

    /// Number of selectors unbound.
    pub removed: usize,

    /// Number of distinct slots written by the batch.
    pub slots_written: usize,
}

/// The selector table of a router.
///
/// Three structures are kept in lockstep:
///
/// - the forward index, mapping each bound selector to its module and its slot position;
/// - the reverse index, listing the selectors of each module;
/// - the slot store, holding every bound selector exactly once.
///
/// The only way to change them is [`FacetRegistry::apply_batch`], which either applies a whole
/// batch of cuts or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetRegistry {
    bindings: HashMap<Selector, Binding>,
    facets: FacetIndex,
    slots: SelectorSlots,
}

impl FacetRegistry {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the module bound to `selector`, or [`ModuleRef::NONE`] if it is unbound.
    pub fn facet_address(&self, selector: &Selector) -> ModuleRef {
        self.bindings
            .get(selector)
            .map_or(ModuleRef::NONE, |binding| binding.module)
    }

    /// Returns the selectors bound to `module`.
    ///
    /// The order is insertion order, except that each removal moves the module's last selector
    /// into the vacated position.
    pub fn facet_function_selectors(&self, module: &ModuleRef) -> &[Selector] {
        self.facets.selectors_of(module)
    }

    /// Returns every module that serves at least one selector.
    pub fn facet_addresses(&self) -> &[ModuleRef] {
        self.facets.modules()
    }

    /// Returns every module together with the selectors bound to it.
    pub fn facets(&self) -> Vec<Facet> {
        self.facets.facets()
    }

    /// Iterates over every bound selector in slot order.
    pub fn selectors(&self) -> impl Iterator<Item = Selector> + '_ {
        self.slots.iter()
    }

    /// Returns the number of bound selectors.
    pub fn selector_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of slots in use.
    pub fn slot_count(&self) -> usize {
        self.slots.slot_count()
    }

    /// Returns how many selectors each slot holds, in slot order.
    pub fn slot_occupancy(&self) -> Vec<usize> {
        (0..self.slots.slot_count())
            .filter_map(|index| self.slots.slot(index))
            .map(SelectorSlot::occupied)
            .collect()
    }

    /// Returns the underlying slot store.
    pub const fn slots(&self) -> &SelectorSlots {
        &self.slots
    }

    /// Applies `cuts` in order, after checking that `caller` is authorized to do so.
    ///
    /// The cuts are applied to a staged copy of the table which replaces the live one only once
    /// every cut succeeded. On error, the table is left exactly as it was.
    pub fn apply_batch<A>(
        &mut self,
        authorizer: &A,
        caller: &Address,
        cuts: &[FacetCut],
    ) -> Result<CutReceipt, RegistryError>
    where
        A: Authorizer + ?Sized,
    {
        if !authorizer.is_authorized(caller) {
            warn!(%caller, "unauthorized attempt to cut the selector table");
            return Err(RegistryError::NotAuthorized { caller: *caller });
        }

        let mut staged = self.clone();
        let mut receipt = CutReceipt::default();

        for (index, cut) in cuts.iter().enumerate() {
            if let Err(err) = staged.apply_cut(index, cut, &mut receipt) {
                warn!(%err, cut = index, batch_size = cuts.len(), "rejected batch of cuts");
                return Err(err);
            }
        }

        receipt.slots_written = staged.slots.take_dirty().len();
        *self = staged;

        info!(
            added = receipt.added,
            replaced = receipt.replaced,
            removed = receipt.removed,
            slots_written = receipt.slots_written,
            selector_count = self.selector_count(),
            "committed batch of cuts"
        );

        Ok(receipt)
    }

    fn apply_cut(
        &mut self,
        index: usize,
        cut: &FacetCut,
        receipt: &mut CutReceipt,
    ) -> Result<(), RegistryError> {
        let count = cut.selectors.len();
        debug!(cut = index, action = %cut.action, target = %cut.target, count, "applying cut");

        if cut.selectors.is_empty() {
            return Err(RegistryError::EmptySelectorList { index });
        }

        let target_required = cut.action != CutAction::Remove;
        if cut.target.is_none() == target_required {
            return Err(RegistryError::InvalidTarget {
                action: cut.action,
                target: cut.target,
            });
        }

        for selector in &cut.selectors {
            match cut.action {
                CutAction::Add => {
                    self.add(cut.target, *selector)?;
                    receipt.added += 1;
                }
                CutAction::Replace => {
                    self.replace(cut.target, *selector)?;
                    receipt.replaced += 1;
                }
                CutAction::Remove => {
                    self.remove(*selector)?;
                    receipt.removed += 1;
                }
            }
        }

        Ok(())
    }

    fn add(&mut self, target: ModuleRef, selector: Selector) -> Result<(), RegistryError> {
        if let Some(existing) = self.bindings.get(&selector) {
            return Err(RegistryError::AlreadyBound {
                selector,
                module: existing.module,
            });
        }

        let slot_position = self.slots.push(selector);
        self.facets.insert(target, selector);
        self.bindings.insert(
            selector,
            Binding {
                module: target,
                slot_position,
            },
        );

        trace!(%selector, module = %target, slot_position, "bound selector");

        Ok(())
    }

    fn replace(&mut self, target: ModuleRef, selector: Selector) -> Result<(), RegistryError> {
        let Some(binding) = self.bindings.get_mut(&selector) else {
            return Err(RegistryError::NotBound { selector });
        };

        let previous = binding.module;
        if previous == target {
            return Err(RegistryError::IdenticalReplacement {
                selector,
                module: target,
            });
        }

        // the slot position of a replaced selector does not change, only its module does.
        binding.module = target;
        self.facets.remove(&previous, &selector);
        self.facets.insert(target, selector);

        trace!(%selector, %previous, module = %target, "rebound selector");

        Ok(())
    }

    fn remove(&mut self, selector: Selector) -> Result<(), RegistryError> {
        let Some(binding) = self.bindings.remove(&selector) else {
            return Err(RegistryError::NotBound { selector });
        };

        self.facets.remove(&binding.module, &selector);

        if let Some(moved) = self.slots.swap_remove(binding.slot_position) {
            match self.bindings.get_mut(&moved) {
                Some(moved_binding) => moved_binding.slot_position = binding.slot_position,
                None => debug_assert!(false, "moved selector {moved} has no binding"),
            }
        }

        trace!(%selector, module = %binding.module, "unbound selector");

        Ok(())
    }

    /// Checks that the forward index, the reverse index and the slot store agree, returning the
    /// first inconsistency found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.slots.check_invariants()?;

        let bindings = self.bindings.len();
        let slotted = self.slots.len();
        let indexed = self.facets.binding_count();
        if bindings != slotted || bindings != indexed {
            return Err(InvariantViolation::SizeMismatch {
                bindings,
                slotted,
                indexed,
            });
        }

        for (selector, binding) in &self.bindings {
            let selector = *selector;

            if binding.module.is_none() {
                return Err(InvariantViolation::BoundToNone { selector });
            }

            if self.slots.get(binding.slot_position) != Some(selector) {
                return Err(InvariantViolation::Misplaced {
                    selector,
                    position: binding.slot_position,
                });
            }

            if self.facets.position(&binding.module, &selector).is_none() {
                return Err(InvariantViolation::NotIndexed {
                    selector,
                    module: binding.module,
                });
            }
        }

        Ok(())
    }
}
