//! The [`SlotPool`] orchestrator.

use crate::cell::{AuxData, OwnerLedger};
use crate::error::MintError;
use crate::guard;
use crate::window::AvailableWindow;
use tombola_core::{CallerGate, IndexSource, OwnerId, SlotBatch, SlotId};

/// A pool that hands out each slot in `[0, capacity)` exactly once.
///
/// Owns the available window, the per-owner ledger, and the two
/// capabilities consumed from the environment: an [`IndexSource`] for
/// random draws and a [`CallerGate`] for eligibility. All operations are
/// synchronous and O(1) per assigned slot; the pool takes `&mut self` for
/// mutation and relies on the caller to serialise writers.
pub struct SlotPool {
    window: AvailableWindow,
    ledger: OwnerLedger,
    source: Box<dyn IndexSource>,
    gate: Box<dyn CallerGate>,
}

impl SlotPool {
    /// Create a pool over `[0, capacity)`.
    ///
    /// Capacity is fixed for the pool's lifetime. Nothing proportional to
    /// it is allocated here or later.
    pub fn new(capacity: u64, source: Box<dyn IndexSource>, gate: Box<dyn CallerGate>) -> Self {
        Self {
            window: AvailableWindow::new(capacity),
            ledger: OwnerLedger::new(),
            source,
            gate,
        }
    }

    /// The fixed universe size.
    pub fn capacity(&self) -> u64 {
        self.window.capacity()
    }

    /// Number of slots still available.
    pub fn remaining(&self) -> u64 {
        self.window.remaining()
    }

    /// Total number of slots handed out so far.
    pub fn assigned_total(&self) -> u64 {
        self.window.assigned()
    }

    /// Mint `quantity` uniformly random slots, attributed to `owner`.
    ///
    /// Preconditions are checked up front, so a rejected request changes
    /// nothing. Each assignment draws independently over the current
    /// window, which shrinks by one per slot within the batch. Returns
    /// the identities in assignment order.
    pub fn mint_random(&mut self, owner: OwnerId, quantity: u64) -> Result<SlotBatch, MintError> {
        guard::check_request(&self.window, self.gate.as_ref(), owner, quantity)?;

        let mut batch = SlotBatch::new();
        for _ in 0..quantity {
            let pick = self.source.draw(self.window.remaining());
            match self.window.pop_random(pick) {
                Ok(slot) => batch.push(slot),
                Err(err) => {
                    // Only a source contract violation can fail here; the
                    // slots already popped remain valid and attributed.
                    self.ledger.record_assignments(owner, batch.len() as u64);
                    return Err(err);
                }
            }
        }
        self.ledger.record_assignments(owner, quantity);
        Ok(batch)
    }

    /// Mint exactly `slot`, attributed to `owner`.
    ///
    /// Succeeds only while the slot is untouched by any prior assignment
    /// or swap; otherwise fails with [`MintError::AlreadyAssigned`].
    pub fn mint_at(&mut self, owner: OwnerId, slot: SlotId) -> Result<SlotId, MintError> {
        guard::check_request(&self.window, self.gate.as_ref(), owner, 1)?;
        let minted = self.window.pop_at(slot)?;
        self.ledger.record_assignments(owner, 1);
        Ok(minted)
    }

    /// Number of slots minted to `owner`.
    pub fn minted_by(&self, owner: OwnerId) -> u64 {
        self.ledger.minted_by(owner)
    }

    /// Overwrite `owner`'s opaque auxiliary value.
    pub fn set_auxiliary(&mut self, owner: OwnerId, aux: AuxData) {
        self.ledger.set_auxiliary(owner, aux);
    }

    /// The auxiliary value stored for `owner` (zero if never set).
    pub fn auxiliary(&self, owner: OwnerId) -> AuxData {
        self.ledger.auxiliary(owner)
    }
}

impl std::fmt::Debug for SlotPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotPool")
            .field("capacity", &self.capacity())
            .field("assigned", &self.assigned_total())
            .field("remaining", &self.remaining())
            .finish_non_exhaustive()
    }
}
