use alloc::vec::Vec;

use crate::error::VecError;

/// A growable vector that owns its storage and reports allocation failure
/// instead of aborting.
///
/// `HeapVec` is the owned counterpart of [`SliceVec`](crate::SliceVec):
/// when a push finds the vector full, it grows the backing storage by
/// doubling. Growth is fallible; on failure the error is returned and the
/// vector is left exactly as it was, elements intact. Backing storage is
/// released when the vector is dropped.
#[derive(Debug)]
pub struct HeapVec<T> {
    inner: Vec<T>,
}

impl<T> HeapVec<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates an empty vector with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `VecError::AllocationFailed` if the reservation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, VecError> {
        let mut inner = Vec::new();
        inner
            .try_reserve_exact(capacity)
            .map_err(|_| VecError::AllocationFailed {
                additional: capacity,
            })?;
        Ok(Self { inner })
    }

    /// Appends an element, growing the backing storage by doubling if the
    /// vector is full.
    ///
    /// # Errors
    ///
    /// Returns `VecError::AllocationFailed` if growing fails. The vector is
    /// unchanged in that case: same elements, same capacity.
    pub fn push(&mut self, item: T) -> Result<(), VecError> {
        if self.inner.len() == self.inner.capacity() {
            let additional = self.inner.capacity().max(1);
            self.inner
                .try_reserve_exact(additional)
                .map_err(|_| VecError::AllocationFailed { additional })?;
        }
        self.inner.push(item);
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Gets a reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.get_mut(index)
    }

    /// Gets a reference to the last element, or `None` if empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Number of elements in the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Number of elements the vector can hold before the next growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// `true` if the next push would have to grow the backing storage.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inner.len() == self.inner.capacity()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for HeapVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'v, T> IntoIterator for &'v HeapVec<T> {
    type Item = &'v T;
    type IntoIter = core::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for HeapVec<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
