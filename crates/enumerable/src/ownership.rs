//! Enumeration of items per owner and globally, e.g. token ids held by accounts.

use std::{collections::HashMap, hash::Hash};

use crate::{errors::EnumerableError, map::EnumerableMap, set::EnumerableSet};

/// Tracks which owner holds which item, enumerable both per owner and across all owners.
///
/// Two parallel structures share item identity: a per-owner [`EnumerableSet`] and a global
/// [`EnumerableMap`] from item to owner. Both are maintained with swap-with-last removal so every
/// operation is O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipIndex<O, I>
where
    O: Clone + Eq + Hash,
    I: Clone + Eq + Hash,
{
    by_owner: HashMap<O, EnumerableSet<I>>,
    global: EnumerableMap<I, O>,
}

impl<O, I> Default for OwnershipIndex<O, I>
where
    O: Clone + Eq + Hash,
    I: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            by_owner: HashMap::new(),
            global: EnumerableMap::new(),
        }
    }
}

impl<O, I> OwnershipIndex<O, I>
where
    O: Clone + Eq + Hash,
    I: Clone + Eq + Hash,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `item` as held by `owner`.
    ///
    /// The item lands at the end of both the owner's list and the global list.
    pub fn append(&mut self, owner: O, item: I) -> Result<(), EnumerableError> {
        if self.global.contains_key(&item) {
            return Err(EnumerableError::ItemExists);
        }

        self.by_owner
            .entry(owner.clone())
            .or_default()
            .insert(item.clone());
        self.global.insert(item, owner);

        Ok(())
    }

    /// Stops tracking `item`, which must be held by `owner`.
    pub fn remove(&mut self, owner: &O, item: &I) -> Result<(), EnumerableError> {
        self.check_owner(owner, item)?;

        self.detach(owner, item);
        self.global.remove(item);

        Ok(())
    }

    /// Moves `item` from `from` to the end of `to`'s list. The global list is left untouched.
    pub fn transfer(&mut self, from: &O, to: O, item: &I) -> Result<(), EnumerableError> {
        self.check_owner(from, item)?;

        self.detach(from, item);
        self.by_owner
            .entry(to.clone())
            .or_default()
            .insert(item.clone());
        if let Some(owner) = self.global.get_mut(item) {
            *owner = to;
        }

        Ok(())
    }

    /// Returns the item at position `index` of `owner`'s list.
    pub fn by_index(&self, owner: &O, index: usize) -> Result<&I, EnumerableError> {
        match self.by_owner.get(owner) {
            Some(items) => items.at(index),
            None => Err(EnumerableError::IndexOutOfBounds { index, len: 0 }),
        }
    }

    /// Returns the item at position `index` of the global list.
    pub fn by_global_index(&self, index: usize) -> Result<&I, EnumerableError> {
        self.global.at(index).map(|(item, _)| item)
    }

    /// Returns the number of items held by `owner`.
    pub fn count(&self, owner: &O) -> usize {
        self.by_owner.get(owner).map_or(0, EnumerableSet::len)
    }

    /// Returns the number of items tracked across all owners.
    pub fn total_count(&self) -> usize {
        self.global.len()
    }

    /// Returns the owner of `item`.
    pub fn owner_of(&self, item: &I) -> Option<&O> {
        self.global.get(item)
    }

    /// Returns the items held by `owner` in positional order.
    pub fn items_of(&self, owner: &O) -> &[I] {
        self.by_owner
            .get(owner)
            .map(EnumerableSet::as_slice)
            .unwrap_or_default()
    }

    fn check_owner(&self, owner: &O, item: &I) -> Result<(), EnumerableError> {
        match self.global.get(item) {
            None => Err(EnumerableError::ItemNotFound),
            Some(current) if current != owner => Err(EnumerableError::NotOwner),
            Some(_) => Ok(()),
        }
    }

    /// Removes `item` from `owner`'s list, dropping the list once it is empty.
    fn detach(&mut self, owner: &O, item: &I) {
        if let Some(items) = self.by_owner.get_mut(owner) {
            items.remove(item);
            if items.is_empty() {
                self.by_owner.remove(owner);
            }
        }
    }
}
