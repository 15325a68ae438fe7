//! Mint flows through the facade with the real seeded entropy source.

use std::collections::HashSet;

use tombola::prelude::*;

const OWNER: OwnerId = OwnerId(1);

fn seeded_pool(capacity: u64, seed: u64) -> SlotPool {
    SlotPool::new(
        capacity,
        Box::new(ChaChaIndexSource::seeded(seed)),
        Box::new(OpenGate),
    )
}

#[test]
fn one_hundred_singles_drain_the_pool_exactly() {
    let mut pool = seeded_pool(100, 0xC0FFEE);
    let mut seen = HashSet::new();

    for _ in 0..100 {
        let batch = pool.mint_random(OWNER, 1).unwrap();
        assert_eq!(batch.len(), 1);
        assert!(seen.insert(batch[0]), "duplicate identity {}", batch[0]);
    }

    assert_eq!(seen.len(), 100);
    assert!((0..100).all(|v| seen.contains(&SlotId(v))));
    assert_eq!(pool.remaining(), 0);
    assert_eq!(
        pool.mint_random(OWNER, 1),
        Err(MintError::CapacityExceeded {
            requested: 1,
            remaining: 0
        })
    );
}

#[test]
fn random_assignment_is_not_sequential() {
    let mut pool = seeded_pool(100, 7);
    let batch = pool.mint_random(OWNER, 20).unwrap();

    let distinct: HashSet<SlotId> = batch.iter().copied().collect();
    assert_eq!(distinct.len(), 20);

    let sequential = batch
        .windows(2)
        .all(|pair| pair[1].0 == pair[0].0 + 1);
    assert!(!sequential, "20 draws came out consecutively ascending");
}

#[test]
fn same_seed_replays_the_same_assignments() {
    let mut a = seeded_pool(1_000_000, 99);
    let mut b = seeded_pool(1_000_000, 99);

    for quantity in [1u64, 5, 17] {
        assert_eq!(
            a.mint_random(OWNER, quantity).unwrap(),
            b.mint_random(OWNER, quantity).unwrap()
        );
    }
}

#[test]
fn exact_and_random_mix_through_the_facade() {
    let mut pool = seeded_pool(1_000_000_000_000, 3);

    assert_eq!(pool.mint_at(OWNER, SlotId(0)).unwrap(), SlotId(0));
    let batch = pool.mint_random(OWNER, 8).unwrap();
    assert!(batch.iter().all(|s| s.0 < 1_000_000_000_000));

    pool.set_auxiliary(OWNER, AuxData::new(0xABCD).unwrap());
    assert_eq!(pool.minted_by(OWNER), 9);
    assert_eq!(pool.auxiliary(OWNER).get(), 0xABCD);
    assert_eq!(pool.assigned_total(), 9);
    assert_eq!(pool.remaining(), 1_000_000_000_000 - 9);
}
