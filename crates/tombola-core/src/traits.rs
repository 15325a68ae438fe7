//! Capability traits the allocator consumes from its environment.

use crate::id::OwnerId;

/// Source of uniformly distributed random indices.
///
/// The pool draws one index per random assignment, always over the
/// currently remaining window. Uniformity over `[0, bound)` is the
/// source's responsibility; the pool validates only that the returned
/// value is in range and rejects the draw otherwise, so a misbehaving
/// source can never corrupt pool state.
pub trait IndexSource {
    /// Draw one value uniformly distributed in `[0, bound)`.
    ///
    /// Called with `bound >= 1` only.
    fn draw(&mut self, bound: u64) -> u64;
}

/// Eligibility predicate for mint requesters.
///
/// Exists to let the environment block non-originating (proxy or
/// automated) actors from draining the random pool in bulk. The pool
/// consumes only the boolean; how origination is established is entirely
/// the environment's concern.
pub trait CallerGate {
    /// Whether `caller` is a direct, traceable requester.
    fn is_originating(&self, caller: OwnerId) -> bool;
}

/// A gate that admits every caller.
///
/// Suitable for environments that do their own vetting upstream, and for
/// tests that are not exercising eligibility.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenGate;

impl CallerGate for OpenGate {
    fn is_originating(&self, _caller: OwnerId) -> bool {
        true
    }
}
