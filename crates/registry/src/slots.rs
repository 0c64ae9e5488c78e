//! Slot-packed storage of every known selector.
//!
//! Selectors are stored back to back in fixed-capacity slots so that bulk mutations touch as few
//! slots as possible. Each slot carries an explicit occupancy count: whether a lane is in use is
//! never inferred from its content, since the all-zero selector is a perfectly valid value.

use std::collections::BTreeSet;

use diamond_primitives::selector::Selector;

use crate::errors::InvariantViolation;

/// Number of selectors that fit in a single slot.
pub const SLOT_CAPACITY: usize = 8;

/// A fixed-capacity group of selectors.
///
/// Only the first `occupied` lanes hold live selectors. The content of the remaining lanes is
/// meaningless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorSlot {
    lanes: [Selector; SLOT_CAPACITY],
    occupied: u8,
}

impl SelectorSlot {
    /// Returns the number of live selectors in this slot.
    pub const fn occupied(&self) -> usize {
        self.occupied as usize
    }

    /// Returns true if no further selector fits in this slot.
    pub const fn is_full(&self) -> bool {
        self.occupied() == SLOT_CAPACITY
    }

    /// Returns the live selectors in this slot.
    pub fn selectors(&self) -> &[Selector] {
        &self.lanes[..self.occupied()]
    }
}

/// The global, densely packed list of selectors.
///
/// A selector is addressed by its position in the list; position `p` lives in lane
/// `p % SLOT_CAPACITY` of slot `p / SLOT_CAPACITY`. Every slot but the last is full and the last
/// slot is never empty, so `count` and the slot occupancies always agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorSlots {
    slots: Vec<SelectorSlot>,
    count: usize,

    /// Slots written since the last call to [`SelectorSlots::take_dirty`].
    dirty: BTreeSet<usize>,
}

impl SelectorSlots {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of selectors stored.
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no selector is stored.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of slots in use.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `index`, if it is in use.
    pub fn slot(&self, index: usize) -> Option<&SelectorSlot> {
        self.slots.get(index)
    }

    /// Returns the selector stored at `position`.
    pub fn get(&self, position: usize) -> Option<Selector> {
        if position >= self.count {
            return None;
        }

        let (slot, lane) = locate(position);
        Some(self.slots[slot].lanes[lane])
    }

    /// Appends `selector` and returns its position.
    pub(crate) fn push(&mut self, selector: Selector) -> usize {
        let position = self.count;
        let (slot, lane) = locate(position);

        if lane == 0 {
            self.slots.push(SelectorSlot::default());
        }

        let target = &mut self.slots[slot];
        target.lanes[lane] = selector;
        target.occupied += 1;

        self.count += 1;
        self.dirty.insert(slot);

        position
    }

    /// Removes the selector at `position` by moving the last selector into it.
    ///
    /// Returns the selector that now lives at `position`, if any (i.e. unless `position` was the
    /// last one), so that callers can update their record of its position.
    ///
    /// # Panics
    ///
    /// If `position` is out of bounds.
    pub(crate) fn swap_remove(&mut self, position: usize) -> Option<Selector> {
        assert!(
            position < self.count,
            "selector position {position} out of bounds for {} selectors",
            self.count
        );

        let last = self.count - 1;
        let (last_slot, last_lane) = locate(last);
        let last_selector = self.slots[last_slot].lanes[last_lane];

        let moved = if position != last {
            let (slot, lane) = locate(position);
            self.slots[slot].lanes[lane] = last_selector;
            self.dirty.insert(slot);

            Some(last_selector)
        } else {
            None
        };

        let tail = &mut self.slots[last_slot];
        tail.lanes[last_lane] = Selector::ZERO;
        tail.occupied -= 1;
        if tail.occupied == 0 {
            self.slots.pop();
        }

        self.count -= 1;
        self.dirty.insert(last_slot);

        moved
    }

    /// Iterates over every stored selector in positional order.
    pub fn iter(&self) -> impl Iterator<Item = Selector> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| slot.selectors().iter().copied())
    }

    /// Returns the set of slots written since the previous call and resets it.
    ///
    /// A slot emptied and dropped during the period is still reported since clearing it is a write
    /// too.
    pub(crate) fn take_dirty(&mut self) -> BTreeSet<usize> {
        std::mem::take(&mut self.dirty)
    }

    /// Checks the packing invariants, returning the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let occupied: usize = self.slots.iter().map(SelectorSlot::occupied).sum();
        if occupied != self.count {
            return Err(InvariantViolation::OccupancyMismatch {
                occupied,
                count: self.count,
            });
        }

        if self.slots.len() != self.count.div_ceil(SLOT_CAPACITY) {
            return Err(InvariantViolation::SlotCountMismatch {
                slots: self.slots.len(),
                count: self.count,
            });
        }

        if let Some((index, _)) = self
            .slots
            .iter()
            .enumerate()
            .rev()
            .skip(1)
            .find(|(_, slot)| !slot.is_full())
        {
            return Err(InvariantViolation::PartialSlot { index });
        }

        Ok(())
    }
}

/// Maps a position in the global list to a (slot, lane) pair.
const fn locate(position: usize) -> (usize, usize) {
    (position / SLOT_CAPACITY, position % SLOT_CAPACITY)
}
