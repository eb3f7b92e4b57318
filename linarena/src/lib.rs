#![no_std]

//! `linarena`: linear arena and fixed-object pool allocation over
//! client-provided buffers.
//!
//! An [`Arena`] bump-allocates from a single borrowed byte buffer. It never
//! owns or frees backing storage, never allocates behind the caller's back,
//! and releases memory only in bulk: [`Arena::reset`] drops everything,
//! [`Arena::mark`] / [`Arena::reset_to`] rewind to a checkpoint. A [`Pool`]
//! layers fixed-size object slots with a hard capacity ceiling on top.
//!
//! This crate is `no_std` compatible and performs no heap allocation.
//!
//! Allocations are issued as [`Region`] handles rather than raw pointers;
//! the bytes are reached through checked accessors that refuse regions a
//! reset has invalidated. Every boundary condition is an ordinary return
//! value: `None` for exhaustion, `Err` for invalid construction.
//!
//! ```
//! use linarena::Arena;
//!
//! let mut storage = [0u8; 64];
//! let mut arena = Arena::new(&mut storage).unwrap();
//!
//! let a = arena.alloc(20).unwrap();
//! assert!(arena.alloc(50).is_none()); // does not fit, arena unchanged
//!
//! arena.bytes_mut(a).unwrap().fill(0xAB);
//! assert_eq!(arena.bytes(a).unwrap()[0], 0xAB);
//!
//! arena.reset();
//! assert!(arena.bytes(a).is_none()); // stale after reset
//! assert_eq!(arena.remaining(), 64);
//! ```
//!
//! # Checkpoints
//!
//! Temporary allocations can be rewound without disturbing earlier, still
//! live ones:
//!
//! ```
//! use linarena::Arena;
//!
//! let mut storage = [0u8; 128];
//! let mut arena = Arena::new(&mut storage).unwrap();
//!
//! let keep = arena.alloc(16).unwrap();
//! let mark = arena.mark();
//! let scratch = arena.alloc(64).unwrap();
//! arena.reset_to(mark);
//!
//! assert!(arena.bytes(keep).is_some());
//! assert!(arena.bytes(scratch).is_none());
//! ```
//!
//! # Pools
//!
//! ```
//! use linarena::{Arena, Pool};
//!
//! let mut storage = [0u8; 256];
//! let mut arena = Arena::new(&mut storage).unwrap();
//! let mut pool = Pool::new(&mut arena, 24, 4).unwrap();
//!
//! for _ in 0..4 {
//!     assert!(pool.alloc().is_some());
//! }
//! assert!(pool.alloc().is_none()); // pool ceiling, not arena exhaustion
//!
//! pool.reset(); // returns all pool space to the arena
//! assert_eq!(pool.used(), 0);
//! ```
//!
//! # Thread safety
//!
//! None. The arena and pool carry no internal synchronization; callers
//! needing concurrent access must wrap them in external synchronization or
//! use per-thread arenas.

mod arena;
mod error;
mod pool;

// Re-export public types
pub use arena::{Arena, ArenaMark, Region, MAX_ALIGN};
pub use error::{ArenaError, PoolError};
pub use pool::Pool;
