//! End-to-end mint flows against deterministic sources.

use std::collections::HashSet;

use tombola_core::{OpenGate, OwnerId, SlotId};
use tombola_pool::{AuxData, MintError, SlotPool};
use tombola_test_utils::{MaxSource, ZeroSource};

const OWNER: OwnerId = OwnerId(1);

fn pool_with_zero_source(capacity: u64) -> SlotPool {
    SlotPool::new(capacity, Box::new(ZeroSource), Box::new(OpenGate))
}

#[test]
fn full_supply_minted_in_batches_of_ten() {
    let mut pool = pool_with_zero_source(100);
    let mut seen = HashSet::new();

    for _ in 0..10 {
        let batch = pool.mint_random(OWNER, 10).unwrap();
        for slot in batch {
            assert!(seen.insert(slot), "duplicate identity {slot}");
        }
    }

    assert_eq!(seen.len(), 100);
    assert!((0..100).all(|v| seen.contains(&SlotId(v))));
    assert_eq!(pool.remaining(), 0);
    assert_eq!(pool.assigned_total(), 100);
    assert_eq!(pool.minted_by(OWNER), 100);
    assert_eq!(
        pool.mint_random(OWNER, 10),
        Err(MintError::CapacityExceeded {
            requested: 10,
            remaining: 0
        })
    );
}

#[test]
fn exact_mint_at_first_and_last_slot() {
    let mut pool = pool_with_zero_source(100);
    assert_eq!(pool.mint_at(OWNER, SlotId(0)).unwrap(), SlotId(0));
    // Slot 99 was swapped into position 0 by the first mint; the pool
    // still hands it out under its own identity.
    assert_eq!(pool.mint_at(OWNER, SlotId(99)).unwrap(), SlotId(99));
    assert_eq!(pool.minted_by(OWNER), 2);
    assert_eq!(pool.remaining(), 98);
}

#[test]
fn random_mint_then_exact_claim_of_the_displaced_identity() {
    let mut pool = pool_with_zero_source(10);
    // ZeroSource pops position 0, handing out identity 0 and moving
    // identity 9 into the vacated position.
    let batch = pool.mint_random(OWNER, 1).unwrap();
    assert_eq!(batch.as_slice(), &[SlotId(0)]);
    assert_eq!(pool.mint_at(OWNER, SlotId(9)).unwrap(), SlotId(9));
    assert_eq!(
        pool.mint_at(OWNER, SlotId(0)),
        Err(MintError::AlreadyAssigned { slot: SlotId(0) })
    );
}

#[test]
fn max_source_drains_in_descending_identity_order() {
    let mut pool = SlotPool::new(5, Box::new(MaxSource), Box::new(OpenGate));
    let batch = pool.mint_random(OWNER, 5).unwrap();
    assert_eq!(
        batch.as_slice(),
        &[SlotId(4), SlotId(3), SlotId(2), SlotId(1), SlotId(0)]
    );
}

#[test]
fn auxiliary_data_and_minting_are_order_independent() {
    let aux = AuxData::MAX;

    // Set auxiliary first, then mint.
    let mut first = pool_with_zero_source(100);
    first.set_auxiliary(OWNER, aux);
    first.mint_random(OWNER, 50).unwrap();
    assert_eq!(first.auxiliary(OWNER), aux);
    assert_eq!(first.minted_by(OWNER), 50);

    // Mint first, then set auxiliary.
    let mut second = pool_with_zero_source(100);
    second.mint_random(OWNER, 50).unwrap();
    second.set_auxiliary(OWNER, aux);
    assert_eq!(second.auxiliary(OWNER), aux);
    assert_eq!(second.minted_by(OWNER), 50);
}

#[test]
fn attribution_is_per_owner() {
    let alice = OwnerId(10);
    let bob = OwnerId(20);
    let mut pool = pool_with_zero_source(100);

    pool.mint_random(alice, 3).unwrap();
    pool.mint_random(bob, 7).unwrap();
    pool.mint_at(alice, SlotId(50)).unwrap();

    assert_eq!(pool.minted_by(alice), 4);
    assert_eq!(pool.minted_by(bob), 7);
    assert_eq!(pool.assigned_total(), 11);
}

#[test]
fn failed_requests_leave_no_trace() {
    let mut pool = pool_with_zero_source(10);
    pool.mint_random(OWNER, 4).unwrap();

    let assigned = pool.assigned_total();
    let minted = pool.minted_by(OWNER);

    assert_eq!(pool.mint_random(OWNER, 0), Err(MintError::ZeroQuantity));
    assert_eq!(
        pool.mint_random(OWNER, 7),
        Err(MintError::CapacityExceeded {
            requested: 7,
            remaining: 6
        })
    );
    assert!(matches!(
        pool.mint_at(OWNER, SlotId(10)),
        Err(MintError::SlotOutOfRange { .. })
    ));

    assert_eq!(pool.assigned_total(), assigned);
    assert_eq!(pool.minted_by(OWNER), minted);
    assert_eq!(pool.remaining(), 6);
}
