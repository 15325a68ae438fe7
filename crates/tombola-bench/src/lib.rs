//! Benchmark profiles for the Tombola slot allocator.
//!
//! Provides pre-drained [`AvailableWindow`] fixtures so the benches can
//! measure pop cost at different fill levels and capacities without
//! rebuilding state inside the measurement loop.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tombola_pool::AvailableWindow;

/// Build a window of `capacity` with `drained` slots already popped.
///
/// Every pop picks position 0, the most displacement-heavy pattern, so
/// the returned window carries a realistic map load for its fill level.
pub fn drained_window(capacity: u64, drained: u64) -> AvailableWindow {
    let mut window = AvailableWindow::new(capacity);
    for _ in 0..drained {
        window
            .pop_random(0)
            .expect("drain count must not exceed capacity");
    }
    window
}
