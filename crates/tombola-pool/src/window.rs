//! Sparse Fisher–Yates window over `[0, capacity)`.
//!
//! [`AvailableWindow`] maintains an implicit permutation of the full slot
//! universe without ever materialising it. Positions `[0, remaining)` form
//! the available window; positions `[remaining, capacity)` are the assigned
//! tail. Only departures from the identity permutation are stored: a
//! displacement entry `p ↦ v` means position `p` currently holds value `v`,
//! and an absent position holds its own index. Each pop swaps the window's
//! boundary value into the vacated position and shrinks the window by one,
//! so both time and storage stay O(1) per assignment regardless of capacity.
//!
//! Alongside the displacement map the window keeps its exact inverse
//! (`value ↦ position`), which lets an exact-slot request locate a
//! still-available identity in one lookup even after random assignments
//! have displaced it. An exact request therefore either returns precisely
//! the identity asked for or fails; it never silently substitutes the
//! value that happens to occupy the requested position.

use indexmap::IndexMap;

use crate::error::MintError;
use tombola_core::SlotId;

/// The authoritative record of which slots have been handed out.
///
/// Constructed once with a fixed capacity; mutated only by the two pop
/// operations. Never grows beyond one displacement entry (plus its
/// inverse) per assignment.
#[derive(Clone, Debug)]
pub struct AvailableWindow {
    /// Upper bound of the slot universe, fixed for the window's lifetime.
    capacity: u64,
    /// Number of slots handed out so far.
    assigned: u64,
    /// Positions whose current value differs from their own index.
    ///
    /// Keys are always inside the window: every pop deletes the entry at
    /// the outgoing boundary position after relocating its value.
    displaced: IndexMap<u64, u64>,
    /// Exact inverse of `displaced`: which position holds a moved value.
    holder: IndexMap<u64, u64>,
}

impl AvailableWindow {
    /// Create a window covering the full universe `[0, capacity)`.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            assigned: 0,
            displaced: IndexMap::new(),
            holder: IndexMap::new(),
        }
    }

    /// The fixed universe size.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of slots still available.
    pub fn remaining(&self) -> u64 {
        self.capacity - self.assigned
    }

    /// Number of slots handed out so far.
    pub fn assigned(&self) -> u64 {
        self.assigned
    }

    /// Number of live displacement entries. Bounded by `assigned()`.
    pub fn displaced_len(&self) -> usize {
        self.displaced.len()
    }

    /// The value currently held at `position`.
    ///
    /// A single map lookup: displacement entries are always stored fully
    /// resolved, so there are no chains to follow.
    fn resolve(&self, position: u64) -> u64 {
        self.displaced.get(&position).copied().unwrap_or(position)
    }

    /// Pop the value at window position `pick`, drawn by an index source.
    ///
    /// `pick` must lie in `[0, remaining)`; an out-of-range pick is the
    /// signature of a misbehaving source and is rejected without touching
    /// any state.
    pub fn pop_random(&mut self, pick: u64) -> Result<SlotId, MintError> {
        let bound = self.remaining();
        if bound == 0 {
            return Err(MintError::CapacityExhausted);
        }
        if pick >= bound {
            return Err(MintError::SourceOutOfRange { drawn: pick, bound });
        }
        Ok(SlotId(self.swap_pop(pick)))
    }

    /// Pop exactly the identity `requested`, or fail.
    ///
    /// The inverse index locates the position currently holding the
    /// requested identity even if a prior swap moved it, so the call
    /// returns exactly `requested` whenever that identity has not been
    /// handed out — and [`MintError::AlreadyAssigned`] once it has.
    pub fn pop_at(&mut self, requested: SlotId) -> Result<SlotId, MintError> {
        let slot = requested.0;
        if self.remaining() == 0 {
            return Err(MintError::CapacityExhausted);
        }
        if slot >= self.capacity {
            return Err(MintError::SlotOutOfRange {
                slot: requested,
                capacity: self.capacity,
            });
        }
        let position = match self.holder.get(&slot) {
            // A swap moved this identity; its holding position is always
            // inside the window.
            Some(&p) => p,
            None => {
                // Never moved: available iff its own position is still in
                // the window and does not hold some other moved value.
                if slot >= self.remaining() || self.displaced.contains_key(&slot) {
                    return Err(MintError::AlreadyAssigned { slot: requested });
                }
                slot
            }
        };
        // resolve(position) == slot by the branch above.
        Ok(SlotId(self.swap_pop(position)))
    }

    /// Swap-pop the value at window position `pick`.
    ///
    /// The boundary position's value moves into the vacated position, the
    /// outgoing boundary entry is dropped, and the window shrinks by one.
    /// Both maps stay exact inverses of each other. Caller guarantees
    /// `pick < remaining()`.
    fn swap_pop(&mut self, pick: u64) -> u64 {
        let value = self.resolve(pick);
        let last = self.remaining() - 1;
        // The handed-out value no longer lives anywhere in the window.
        self.displaced.swap_remove(&pick);
        self.holder.swap_remove(&value);
        if pick != last {
            let boundary = self.resolve(last);
            self.displaced.swap_remove(&last);
            self.displaced.insert(pick, boundary);
            self.holder.insert(boundary, pick);
        }
        self.assigned += 1;
        value
    }
}
