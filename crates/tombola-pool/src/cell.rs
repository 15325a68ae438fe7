//! Packed per-owner cells and the ledger that holds them.
//!
//! Each owner gets one `u128` cell split into two independent bit ranges:
//! bits `[0, 32)` count the slots minted to that owner, bits `[32, 128)`
//! hold an opaque 96-bit auxiliary value whose semantics belong entirely
//! to the caller. Every write masks its own range, so updating one field
//! can never perturb the other.

use indexmap::IndexMap;

use tombola_core::OwnerId;

/// Bit width of the per-owner minted counter.
const COUNTER_BITS: u32 = 32;
/// Mask selecting the counter range of a cell.
const COUNTER_MASK: u128 = (1u128 << COUNTER_BITS) - 1;

/// Opaque auxiliary value attached to an owner, at most 96 bits wide.
///
/// The pool never inspects the value; the width limit exists only so the
/// value fits its bit range in the packed cell. Construction is checked,
/// making an oversized value unrepresentable past the API boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AuxData(u128);

impl AuxData {
    /// Largest representable auxiliary value: `2^96 − 1`.
    pub const MAX: AuxData = AuxData((1u128 << 96) - 1);

    /// Wrap a raw value, or `None` if it exceeds 96 bits.
    pub fn new(value: u128) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The raw value.
    pub fn get(self) -> u128 {
        self.0
    }
}

/// Per-owner packed cells, keyed by [`OwnerId`].
///
/// Owners appear in the ledger only once something has been written for
/// them; an absent owner reads as zero in both fields.
#[derive(Clone, Debug, Default)]
pub struct OwnerLedger {
    cells: IndexMap<OwnerId, u128>,
}

impl OwnerLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            cells: IndexMap::new(),
        }
    }

    /// Add `count` successful assignments to `owner`'s minted counter.
    ///
    /// The auxiliary bits are untouched. The counter field is 32 bits
    /// wide; the write is masked to its range, so even a counter past
    /// `2^32` (unreachable for realistic capacities) cannot bleed into
    /// the auxiliary value.
    pub fn record_assignments(&mut self, owner: OwnerId, count: u64) {
        let cell = self.cells.entry(owner).or_insert(0);
        let bumped = ((*cell & COUNTER_MASK) + u128::from(count)) & COUNTER_MASK;
        *cell = (*cell & !COUNTER_MASK) | bumped;
    }

    /// Overwrite `owner`'s auxiliary value. The minted counter is untouched.
    pub fn set_auxiliary(&mut self, owner: OwnerId, aux: AuxData) {
        let cell = self.cells.entry(owner).or_insert(0);
        *cell = (*cell & COUNTER_MASK) | (aux.0 << COUNTER_BITS);
    }

    /// Number of slots minted to `owner`.
    pub fn minted_by(&self, owner: OwnerId) -> u64 {
        let cell = self.cells.get(&owner).copied().unwrap_or(0);
        (cell & COUNTER_MASK) as u64
    }

    /// The auxiliary value stored for `owner` (zero if never set).
    pub fn auxiliary(&self, owner: OwnerId) -> AuxData {
        let cell = self.cells.get(&owner).copied().unwrap_or(0);
        AuxData(cell >> COUNTER_BITS)
    }

    /// Number of owners with a live cell.
    pub fn owner_count(&self) -> usize {
        self.cells.len()
    }
}
