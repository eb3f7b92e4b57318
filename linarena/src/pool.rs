use crate::arena::{Arena, ArenaMark, Region, MAX_ALIGN};
use crate::error::PoolError;

/// A fixed-object-size allocator layered on an [`Arena`].
///
/// The pool borrows its arena exclusively for its own lifetime, so its
/// consumption is contiguous from the offset at construction and
/// [`reset`](Pool::reset) returns exactly the pool-attributable space.
/// Objects are never freed individually.
#[derive(Debug)]
pub struct Pool<'p, 'a> {
    arena: &'p mut Arena<'a>,
    base: ArenaMark,
    object_size: usize,
    capacity: usize,
    used: usize,
}

impl<'p, 'a> Pool<'p, 'a> {
    /// Creates a pool of `max_objects` slots of `object_size` bytes each
    /// (rounded up to [`MAX_ALIGN`]) on the given arena.
    ///
    /// The arena is not mutated on failure.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::InvalidInitialization` if `object_size` or
    /// `max_objects` is zero, or if the total pool size overflows.
    /// Returns `PoolError::ArenaTooSmall` if the arena's remaining capacity
    /// cannot hold the full pool.
    pub fn new(
        arena: &'p mut Arena<'a>,
        object_size: usize,
        max_objects: usize,
    ) -> Result<Self, PoolError> {
        if object_size == 0 {
            return Err(PoolError::InvalidInitialization {
                reason: "object_size must be non-zero",
            });
        }
        if max_objects == 0 {
            return Err(PoolError::InvalidInitialization {
                reason: "max_objects must be non-zero",
            });
        }

        let aligned_size = object_size
            .checked_add(MAX_ALIGN - 1)
            .map(|n| n & !(MAX_ALIGN - 1))
            .ok_or(PoolError::InvalidInitialization {
                reason: "aligned object_size overflows",
            })?;

        // Padding to bring the arena's current offset up to alignment;
        // slot allocations after the first start aligned already.
        let lead_pad = (MAX_ALIGN - (arena.used() & (MAX_ALIGN - 1))) & (MAX_ALIGN - 1);

        let required = aligned_size
            .checked_mul(max_objects)
            .and_then(|n| n.checked_add(lead_pad))
            .ok_or(PoolError::InvalidInitialization {
                reason: "total pool size overflows",
            })?;

        if required > arena.remaining() {
            return Err(PoolError::ArenaTooSmall {
                required,
                remaining: arena.remaining(),
            });
        }

        let base = arena.mark();
        Ok(Self {
            arena,
            base,
            object_size: aligned_size,
            capacity: max_objects,
            used: 0,
        })
    }

    /// Allocates one object slot.
    ///
    /// Returns `None` once `used() == capacity()`, regardless of space left
    /// in the backing arena; the pool's capacity is a hard ceiling fixed at
    /// construction.
    pub fn alloc(&mut self) -> Option<Region> {
        if self.used >= self.capacity {
            return None;
        }
        // Cannot fail: capacity was validated at construction and the
        // exclusive borrow keeps other allocations out of the arena.
        let region = self.arena.alloc_aligned(self.object_size, MAX_ALIGN)?;
        self.used += 1;
        Some(region)
    }

    /// Resolves a slot region to its bytes. See [`Arena::bytes`].
    #[must_use]
    pub fn bytes(&self, region: Region) -> Option<&[u8]> {
        self.arena.bytes(region)
    }

    /// Resolves a slot region to its bytes, mutably. See [`Arena::bytes_mut`].
    pub fn bytes_mut(&mut self, region: Region) -> Option<&mut [u8]> {
        self.arena.bytes_mut(region)
    }

    /// Returns all pool space to the arena and invalidates every slot
    /// issued so far.
    pub fn reset(&mut self) {
        self.arena.reset_to(self.base);
        self.used = 0;
    }

    /// Objects currently allocated.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Maximum number of objects, fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` once every slot has been allocated.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.used >= self.capacity
    }

    /// Size of each slot in bytes, after alignment rounding.
    #[must_use]
    pub fn object_size(&self) -> usize {
        self.object_size
    }
}
