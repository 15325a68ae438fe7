//! Tombola: random-without-replacement slot allocation over huge fixed universes.
//!
//! A [`SlotPool`](prelude::SlotPool) hands out each integer identity in
//! `[0, capacity)` exactly once — either at a uniformly random
//! still-available slot, or at an exact slot the caller names — while
//! touching storage proportional only to the number of slots already
//! assigned. Capacities near `u64::MAX` cost the same per assignment as a
//! capacity of ten.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tombola sub-crates and provides the default entropy capability.
//!
//! # Quick start
//!
//! ```rust
//! use tombola::prelude::*;
//!
//! let source = ChaChaIndexSource::seeded(42);
//! let mut pool = SlotPool::new(1_000_000_000_000, Box::new(source), Box::new(OpenGate));
//!
//! // An exact slot, still untouched on a fresh pool.
//! let slot = pool.mint_at(OwnerId(1), SlotId(7)).unwrap();
//! assert_eq!(slot, SlotId(7));
//!
//! // Five random slots, no repeats possible, attributed to owner 1.
//! let batch = pool.mint_random(OwnerId(1), 5).unwrap();
//! assert_eq!(batch.len(), 5);
//! assert_eq!(pool.remaining(), 1_000_000_000_000 - 6);
//! assert_eq!(pool.minted_by(OwnerId(1)), 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tombola-core` | Identifiers, batch alias, capability traits |
//! | [`pool`] | `tombola-pool` | `SlotPool`, window, ledger, errors |
//! | [`entropy`] | (this crate) | `ChaChaIndexSource` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod entropy;

pub use tombola_core as types;
pub use tombola_pool as pool;

/// The working set for typical use.
pub mod prelude {
    pub use crate::entropy::ChaChaIndexSource;
    pub use tombola_core::{CallerGate, IndexSource, OpenGate, OwnerId, SlotBatch, SlotId};
    pub use tombola_pool::{AuxData, MintError, SlotPool};
}
