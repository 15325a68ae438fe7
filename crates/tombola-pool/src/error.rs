//! Pool-specific error types.

use std::error::Error;
use std::fmt;

use tombola_core::{OwnerId, SlotId};

/// Errors that can occur while minting slots.
///
/// All variants are detected synchronously, none are retried internally,
/// and a failed call never mutates the pool's counters, displacement
/// entries, or owner cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintError {
    /// A batch request asked for zero slots.
    ZeroQuantity,
    /// A batch request asked for more slots than remain available.
    CapacityExceeded {
        /// Number of slots requested.
        requested: u64,
        /// Number of slots still available.
        remaining: u64,
    },
    /// No slots remain for a single assignment.
    CapacityExhausted,
    /// An exact-slot request named a slot that is no longer available.
    ///
    /// Also raised when the named position has been displaced by a prior
    /// random assignment's swap: the pool refuses to silently hand back a
    /// different identity than the one requested.
    AlreadyAssigned {
        /// The slot that was requested.
        slot: SlotId,
    },
    /// The requester failed the environment's eligibility check.
    IneligibleCaller {
        /// The rejected requester.
        owner: OwnerId,
    },
    /// An exact-slot request named a slot outside `[0, capacity)`.
    SlotOutOfRange {
        /// The slot that was requested.
        slot: SlotId,
        /// The pool's capacity.
        capacity: u64,
    },
    /// The entropy capability returned a value outside the range it was
    /// asked for. The offending draw is rejected before it can touch the
    /// window.
    SourceOutOfRange {
        /// The value the source returned.
        drawn: u64,
        /// The exclusive upper bound it was asked for.
        bound: u64,
    },
}

impl fmt::Display for MintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroQuantity => write!(f, "must mint at least one slot"),
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "not enough available slots: requested {requested}, remaining {remaining}"
                )
            }
            Self::CapacityExhausted => write!(f, "no slots remaining"),
            Self::AlreadyAssigned { slot } => {
                write!(f, "slot {slot} is no longer available")
            }
            Self::IneligibleCaller { owner } => {
                write!(f, "caller {owner} is not an originating requester")
            }
            Self::SlotOutOfRange { slot, capacity } => {
                write!(f, "slot {slot} is outside the pool capacity {capacity}")
            }
            Self::SourceOutOfRange { drawn, bound } => {
                write!(f, "index source returned {drawn}, expected a value below {bound}")
            }
        }
    }
}

impl Error for MintError {}
