use linarena::{Arena, Pool, PoolError, MAX_ALIGN};

#[test]
fn test_pool_initialization() {
    let mut storage = [0u8; 256];
    let mut arena = Arena::new(&mut storage).unwrap();
    let pool = Pool::new(&mut arena, 10, 4).unwrap();

    assert_eq!(pool.used(), 0);
    assert_eq!(pool.capacity(), 4);
    assert!(!pool.is_full());
    assert_eq!(pool.object_size() % MAX_ALIGN, 0);
    assert!(pool.object_size() >= 10);
}

#[test]
fn test_pool_rejects_zero_parameters() {
    let mut storage = [0u8; 256];

    let mut arena = Arena::new(&mut storage).unwrap();
    assert!(matches!(
        Pool::new(&mut arena, 0, 4),
        Err(PoolError::InvalidInitialization { .. })
    ));
    assert!(matches!(
        Pool::new(&mut arena, 8, 0),
        Err(PoolError::InvalidInitialization { .. })
    ));
    // Failed construction must not consume arena space.
    assert_eq!(arena.used(), 0);
}

#[test]
fn test_pool_rejects_undersized_arena() {
    let mut storage = [0u8; 64];
    let mut arena = Arena::new(&mut storage).unwrap();

    let err = Pool::new(&mut arena, 16, 8).unwrap_err();
    assert_eq!(
        err,
        PoolError::ArenaTooSmall {
            required: 128,
            remaining: 64,
        }
    );
    assert_eq!(arena.used(), 0);
}

#[test]
fn test_pool_capacity_ceiling() {
    let mut storage = [0u8; 1024];
    let mut arena = Arena::new(&mut storage).unwrap();

    // The arena could hold far more than 3 objects; the pool must stop
    // at its own ceiling anyway.
    let mut pool = Pool::new(&mut arena, 8, 3).unwrap();

    for i in 0..3 {
        assert_eq!(pool.used(), i);
        assert!(pool.alloc().is_some());
    }
    assert!(pool.is_full());
    assert!(pool.alloc().is_none());
    assert_eq!(pool.used(), 3);
}

#[test]
fn test_pool_slots_are_disjoint_and_aligned() {
    let mut storage = [0u8; 256];
    let mut arena = Arena::new(&mut storage).unwrap();
    let mut pool = Pool::new(&mut arena, 12, 4).unwrap();

    let slots: Vec<_> = (0..4).map(|_| pool.alloc().unwrap()).collect();

    for (i, a) in slots.iter().enumerate() {
        assert_eq!(a.offset() % MAX_ALIGN, 0);
        for b in slots.iter().skip(i + 1) {
            assert!(a.offset() + a.len() <= b.offset() || b.offset() + b.len() <= a.offset());
        }
    }
}

#[test]
fn test_pool_slot_bytes_round_trip() {
    let mut storage = [0u8; 256];
    let mut arena = Arena::new(&mut storage).unwrap();
    let mut pool = Pool::new(&mut arena, 4, 2).unwrap();

    let slot = pool.alloc().unwrap();
    pool.bytes_mut(slot).unwrap()[..4].copy_from_slice(b"node");

    assert_eq!(&pool.bytes(slot).unwrap()[..4], b"node");
}

#[test]
fn test_pool_reset_returns_space_to_arena() {
    let mut storage = [0u8; 256];
    let mut arena = Arena::new(&mut storage).unwrap();
    arena.alloc(16).unwrap();
    let used_before_pool = arena.used();

    {
        let mut pool = Pool::new(&mut arena, 8, 4).unwrap();
        let slot = pool.alloc().unwrap();
        pool.alloc().unwrap();

        pool.reset();
        assert_eq!(pool.used(), 0);
        assert!(pool.bytes(slot).is_none());

        // The pool can be refilled to its full capacity after a reset.
        for _ in 0..4 {
            assert!(pool.alloc().is_some());
        }
        assert!(pool.alloc().is_none());

        pool.reset();
    }

    assert_eq!(arena.used(), used_before_pool);
}

#[test]
fn test_pool_reset_preserves_earlier_arena_allocations() {
    let mut storage = [0u8; 256];
    let mut arena = Arena::new(&mut storage).unwrap();

    let earlier = arena.alloc(8).unwrap();
    arena.bytes_mut(earlier).unwrap().copy_from_slice(b"earlier!");

    {
        let mut pool = Pool::new(&mut arena, 8, 4).unwrap();
        pool.alloc().unwrap();
        pool.reset();
    }

    assert_eq!(arena.bytes(earlier).unwrap(), b"earlier!");
    assert_eq!(arena.used(), 8);
}
