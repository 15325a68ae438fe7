//! Strongly-typed identifiers and the [`SlotBatch`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// One identity out of the pool's fixed universe `[0, capacity)`.
///
/// A `SlotId` is handed out at most once over a pool's lifetime. The
/// numeric value carries no meaning beyond uniqueness; callers attach
/// their own semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SlotId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Opaque identity of the party a mint is attributed to.
///
/// The allocator never interprets the value; it only keys the per-owner
/// ledger with it. Environments map their own notion of an account or
/// principal onto this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(pub u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OwnerId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Slots returned by one batch mint, in assignment order.
///
/// Uses `SmallVec<[SlotId; 8]>` so the common small-batch case stays off
/// the heap; larger batches spill transparently.
pub type SlotBatch = SmallVec<[SlotId; 8]>;
