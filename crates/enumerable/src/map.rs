//! An insertion-ordered map with constant-time removal.

use std::{collections::HashMap, hash::Hash};

use crate::errors::EnumerableError;

/// A map whose entries can be enumerated by position.
///
/// Same layout and removal discipline as [`EnumerableSet`](crate::EnumerableSet): a dense vector
/// of entries plus a key to position table, with swap-with-last removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerableMap<K, V>
where
    K: Clone + Eq + Hash,
{
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> Default for EnumerableMap<K, V>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K, V> EnumerableMap<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if there is an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.positions
            .get(key)
            .map(|&pos| &mut self.entries[pos].1)
    }

    /// Returns the current position of `key`, if present.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Returns the entry at `index`.
    pub fn at(&self, index: usize) -> Result<(&K, &V), EnumerableError> {
        self.entries
            .get(index)
            .map(|(k, v)| (k, v))
            .ok_or(EnumerableError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
    }

    /// Inserts or updates the entry for `key`.
    ///
    /// Updating an existing entry keeps its position and returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&pos) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));

        None
    }

    /// Removes the entry for `key` by moving the last entry into its position.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.positions.remove(key)?;
        let (_, value) = self.entries.swap_remove(position);

        if let Some((moved, _)) = self.entries.get(position) {
            self.positions.insert(moved.clone(), position);
        }

        Some(value)
    }

    /// Iterates over the entries in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterates over the keys in positional order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}
