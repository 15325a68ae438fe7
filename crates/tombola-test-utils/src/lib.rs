//! Test utilities and mock capabilities for Tombola development.

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod fixtures;

pub use fixtures::{DenyAllGate, MaxSource, ScriptedSource, ZeroSource};
