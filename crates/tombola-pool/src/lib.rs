//! Sparse swap-pop slot pool for the Tombola allocator.
//!
//! A [`SlotPool`] hands out each identity in `[0, capacity)` exactly once,
//! either at a uniformly random still-available slot or at an exact slot the
//! caller names, while touching storage proportional only to the number of
//! slots already assigned — never to the capacity.
//!
//! # Architecture
//!
//! ```text
//! SlotPool (orchestrator)
//! ├── AvailableWindow (sparse Fisher–Yates permutation over [0, capacity))
//! │   └── IndexMap<u64, u64> displacement entries (absent key k ⇒ value k)
//! ├── OwnerLedger (OwnerId → packed u128 cell: minted counter + aux data)
//! ├── Box<dyn IndexSource> (entropy capability, supplied at construction)
//! └── Box<dyn CallerGate> (eligibility capability, supplied at construction)
//! ```
//!
//! The mint guard in [`guard`] validates every request up front, so a
//! request either applies in full or leaves the pool untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod cell;
pub mod error;
pub mod guard;
pub mod pool;
pub mod window;

// Public re-exports for the primary API surface.
pub use cell::{AuxData, OwnerLedger};
pub use error::MintError;
pub use pool::SlotPool;
pub use window::AvailableWindow;
