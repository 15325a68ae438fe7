//! Reusable capability fixtures.
//!
//! Deterministic stand-ins for the two capabilities a pool consumes:
//!
//! - [`ZeroSource`] — always draws index 0 (every pop displaces the boundary).
//! - [`MaxSource`] — always draws `bound - 1` (no pop ever displaces anything).
//! - [`ScriptedSource`] — replays a fixed list of draws, range-checked or not.
//! - [`DenyAllGate`] — rejects every caller.

use tombola_core::{CallerGate, IndexSource, OwnerId};

/// Always draws index 0.
///
/// The most adversarial deterministic source for the swap bookkeeping:
/// every single pop vacates the head of the window and pulls the boundary
/// value into it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroSource;

impl IndexSource for ZeroSource {
    fn draw(&mut self, _bound: u64) -> u64 {
        0
    }
}

/// Always draws `bound - 1`, the window boundary.
///
/// The gentlest deterministic source: no pop ever creates a displacement
/// entry, so slots come out in descending identity order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxSource;

impl IndexSource for MaxSource {
    fn draw(&mut self, bound: u64) -> u64 {
        bound - 1
    }
}

/// Replays a fixed list of draws, ignoring the requested bound.
///
/// Useful both for steering a pool through a known pop sequence and for
/// exercising the pool's defence against sources that violate the
/// `[0, bound)` contract.
///
/// # Panics
///
/// `draw` panics when the script runs out.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    picks: Vec<u64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that returns `picks` in order.
    pub fn new(picks: Vec<u64>) -> Self {
        Self { picks, cursor: 0 }
    }
}

impl IndexSource for ScriptedSource {
    fn draw(&mut self, _bound: u64) -> u64 {
        let pick = self.picks.get(self.cursor).copied().unwrap_or_else(|| {
            panic!(
                "ScriptedSource exhausted after {} draws",
                self.picks.len()
            )
        });
        self.cursor += 1;
        pick
    }
}

/// Rejects every caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenyAllGate;

impl CallerGate for DenyAllGate {
    fn is_originating(&self, _caller: OwnerId) -> bool {
        false
    }
}
