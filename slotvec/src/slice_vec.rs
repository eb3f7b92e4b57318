use crate::error::VecError;

/// A fixed-capacity vector over client-provided storage.
///
/// The storage slice is borrowed, never reallocated, and its length is the
/// capacity forever: a push into a full vector fails with
/// [`VecError::CapacityExceeded`] rather than growing. For a vector that
/// owns and grows its storage, use [`HeapVec`](crate::HeapVec).
///
/// Only elements at indices below `len()` are part of the vector; the
/// remaining slots hold whatever the caller left there and are never read.
#[derive(Debug)]
pub struct SliceVec<'a, T> {
    storage: &'a mut [T],
    len: usize,
}

impl<'a, T> SliceVec<'a, T> {
    /// Creates a vector over the given storage, with capacity fixed at
    /// `storage.len()`.
    ///
    /// # Errors
    ///
    /// Returns `VecError::InvalidInitialization` if the storage is empty.
    pub fn new(storage: &'a mut [T]) -> Result<Self, VecError> {
        if storage.is_empty() {
            return Err(VecError::InvalidInitialization {
                reason: "storage must hold at least one element",
            });
        }
        Ok(Self { storage, len: 0 })
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns `VecError::CapacityExceeded` if the vector is full; the
    /// vector never grows and the rejected item is dropped.
    pub fn push(&mut self, item: T) -> Result<(), VecError> {
        if self.len >= self.storage.len() {
            return Err(VecError::CapacityExceeded {
                capacity: self.storage.len(),
            });
        }
        self.storage[self.len] = item;
        self.len += 1;
        Ok(())
    }

    /// Gets a reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.storage.get(index)
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.storage.get_mut(index)
    }

    /// Gets a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// The caller must have already established `index < len()`; anything
    /// else is undefined behavior.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {} out of bounds", index);
        // SAFETY: the caller guarantees index < len, and len never exceeds
        // the storage length.
        unsafe { self.storage.get_unchecked(index) }
    }

    /// Gets a reference to the last element, or `None` if empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.storage.get(i))
    }

    /// Resets the length to zero without touching the storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of elements in the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Capacity, fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` once a further push would fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len >= self.storage.len()
    }

    /// The in-use elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// The in-use elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<'a, T: Clone> SliceVec<'a, T> {
    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The vacated slot keeps its value; it is simply no longer part of the
    /// vector.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.storage[self.len].clone())
    }
}

impl<'v, 'a, T> IntoIterator for &'v SliceVec<'a, T> {
    type Item = &'v T;
    type IntoIter = core::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
