use crate::error::ArenaError;

/// Alignment applied by [`Arena::alloc`]: the platform's pointer-width
/// natural alignment.
pub const MAX_ALIGN: usize = core::mem::align_of::<usize>();

/// A half-open byte range issued by a successful allocation.
///
/// A `Region` is a handle, not a pointer: the bytes are reached through
/// [`Arena::bytes`] / [`Arena::bytes_mut`], which reject regions that a
/// `reset` or `reset_to` has invalidated. Resolving a region through an
/// arena other than the one that issued it is not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    offset: usize,
    len: usize,
}

impl Region {
    /// Byte offset of the region within the arena buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the region in bytes. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// A saved allocation offset, enabling partial rewind via [`Arena::reset_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaMark(usize);

/// A linear (bump) allocator over a client-provided byte buffer.
///
/// The arena borrows its backing storage and never frees it; allocations
/// are released only in bulk, via [`reset`](Arena::reset) or
/// [`reset_to`](Arena::reset_to).
#[derive(Debug)]
pub struct Arena<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> Arena<'a> {
    /// Creates an arena over the given backing buffer.
    ///
    /// # Errors
    ///
    /// Returns `ArenaError::EmptyBuffer` if the buffer is empty.
    pub fn new(buffer: &'a mut [u8]) -> Result<Self, ArenaError> {
        if buffer.is_empty() {
            return Err(ArenaError::EmptyBuffer);
        }
        Ok(Self { buffer, offset: 0 })
    }

    /// Allocates `size` bytes aligned to [`MAX_ALIGN`].
    ///
    /// Returns `None` if `size` is zero or the aligned request does not fit
    /// in the remaining capacity. A failed allocation leaves the arena
    /// unchanged.
    pub fn alloc(&mut self, size: usize) -> Option<Region> {
        self.alloc_aligned(size, MAX_ALIGN)
    }

    /// Allocates `size` bytes aligned to `align`, which must be a power of
    /// two.
    ///
    /// Returns `None` if `size` is zero, `align` is not a power of two, or
    /// the padded request does not fit in the remaining capacity (including
    /// arithmetic overflow of the padded size).
    pub fn alloc_aligned(&mut self, size: usize, align: usize) -> Option<Region> {
        if size == 0 || !align.is_power_of_two() {
            return None;
        }

        let pad = (align - (self.offset & (align - 1))) & (align - 1);
        let start = self.offset.checked_add(pad)?;
        let end = start.checked_add(size)?;

        if end > self.buffer.len() {
            return None;
        }

        self.offset = end;
        Some(Region { offset: start, len: size })
    }

    /// Checks whether an [`alloc`](Arena::alloc) of `size` bytes would
    /// succeed, without allocating.
    #[must_use]
    pub fn fits(&self, size: usize) -> bool {
        if size == 0 {
            return false;
        }
        let pad = (MAX_ALIGN - (self.offset & (MAX_ALIGN - 1))) & (MAX_ALIGN - 1);
        self.offset
            .checked_add(pad)
            .and_then(|start| start.checked_add(size))
            .is_some_and(|end| end <= self.buffer.len())
    }

    /// Resolves a region to its bytes.
    ///
    /// Returns `None` for a stale region, i.e. one extending past the
    /// current allocation offset after a `reset` or `reset_to`.
    #[must_use]
    pub fn bytes(&self, region: Region) -> Option<&[u8]> {
        if region.end() > self.offset {
            return None;
        }
        self.buffer.get(region.offset..region.end())
    }

    /// Resolves a region to its bytes, mutably.
    ///
    /// Returns `None` for a stale region, as [`bytes`](Arena::bytes) does.
    pub fn bytes_mut(&mut self, region: Region) -> Option<&mut [u8]> {
        if region.end() > self.offset {
            return None;
        }
        self.buffer.get_mut(region.offset..region.end())
    }

    /// Releases all allocations by resetting the offset to zero.
    ///
    /// Regions issued before the reset become stale; resolving one returns
    /// `None`.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Saves the current allocation offset as a checkpoint.
    #[must_use]
    pub fn mark(&self) -> ArenaMark {
        ArenaMark(self.offset)
    }

    /// Rewinds the allocation offset to a previously saved checkpoint,
    /// releasing every allocation made after it.
    ///
    /// # Panics
    ///
    /// Debug builds panic on a mark beyond the current offset (a mark from
    /// a different arena, or one taken before a later `reset`); release
    /// builds clamp to the current offset.
    pub fn reset_to(&mut self, mark: ArenaMark) {
        debug_assert!(
            mark.0 <= self.offset,
            "mark {} is ahead of arena offset {}",
            mark.0,
            self.offset
        );
        self.offset = mark.0.min(self.offset);
    }

    /// Bytes still available for allocation, before alignment padding.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Total capacity of the backing buffer in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes consumed so far, including alignment padding.
    #[must_use]
    pub fn used(&self) -> usize {
        self.offset
    }

    /// `true` if no allocations are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }
}
