//! An insertion-ordered set with constant-time removal.

use std::{collections::HashMap, hash::Hash};

use crate::errors::EnumerableError;

/// A set that can be enumerated by position.
///
/// Elements live in a dense vector and a side table records the position of each element. Removal
/// moves the last element into the vacated position, so the relative order of the remaining
/// elements is preserved except for the moved one.
///
/// Every operation is O(1) (amortized for insertion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerableSet<T>
where
    T: Clone + Eq + Hash,
{
    items: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T> Default for EnumerableSet<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> EnumerableSet<T>
where
    T: Clone + Eq + Hash,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if `item` is in the set.
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Returns the current position of `item`, if present.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.positions.get(item).copied()
    }

    /// Returns the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, EnumerableError> {
        self.items
            .get(index)
            .ok_or(EnumerableError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
    }

    /// Appends `item` to the end of the set.
    ///
    /// Returns false, leaving the set untouched, if the item is already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.positions.contains_key(&item) {
            return false;
        }

        self.positions.insert(item.clone(), self.items.len());
        self.items.push(item);

        true
    }

    /// Removes `item` from the set by moving the last element into its position.
    ///
    /// Returns false if the item was not present.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(position) = self.positions.remove(item) else {
            return false;
        };

        self.items.swap_remove(position);

        // if the removed element was not the last one, the former last element now lives at
        // `position` and its recorded position must follow it.
        if let Some(moved) = self.items.get(position) {
            self.positions.insert(moved.clone(), position);
        }

        true
    }

    /// Iterates over the elements in positional order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the elements in positional order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a EnumerableSet<T>
where
    T: Clone + Eq + Hash,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for EnumerableSet<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }

        set
    }
}
