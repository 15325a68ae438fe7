//! Core types and traits for the Tombola slot allocator.
//!
//! This crate holds the vocabulary shared by every Tombola crate: the
//! strongly-typed identifiers ([`SlotId`], [`OwnerId`]), the batch result
//! alias ([`SlotBatch`]), and the two capabilities the allocator consumes
//! from its environment ([`IndexSource`] for entropy, [`CallerGate`] for
//! eligibility). It contains no allocation logic of its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod id;
pub mod traits;

pub use id::{OwnerId, SlotBatch, SlotId};
pub use traits::{CallerGate, IndexSource, OpenGate};
