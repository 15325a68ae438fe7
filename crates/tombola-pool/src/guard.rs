//! Mint preconditions, checked before any state is touched.

use crate::error::MintError;
use crate::window::AvailableWindow;
use tombola_core::{CallerGate, OwnerId};

/// Validate a batch request of `quantity` assignments for `owner`.
///
/// Checks run in a fixed order — quantity, capacity, eligibility — and a
/// failure in any of them surfaces before a single slot is popped, so a
/// rejected request leaves the pool exactly as it found it.
pub fn check_request(
    window: &AvailableWindow,
    gate: &dyn CallerGate,
    owner: OwnerId,
    quantity: u64,
) -> Result<(), MintError> {
    if quantity == 0 {
        return Err(MintError::ZeroQuantity);
    }
    let remaining = window.remaining();
    if quantity > remaining {
        return Err(MintError::CapacityExceeded {
            requested: quantity,
            remaining,
        });
    }
    if !gate.is_originating(owner) {
        return Err(MintError::IneligibleCaller { owner });
    }
    Ok(())
}
