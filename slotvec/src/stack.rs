use crate::error::VecError;
use crate::slice_vec::SliceVec;

/// A LIFO stack: [`SliceVec`] restricted to back-only push and pop.
///
/// Being a wrapper rather than a reimplementation, its boundary behavior
/// (full on push, empty on pop) is `SliceVec`'s by construction.
#[derive(Debug)]
pub struct Stack<'a, T> {
    items: SliceVec<'a, T>,
}

impl<'a, T> Stack<'a, T> {
    /// Creates a stack over the given storage, with capacity fixed at
    /// `storage.len()`.
    ///
    /// # Errors
    ///
    /// Returns `VecError::InvalidInitialization` if the storage is empty.
    pub fn new(storage: &'a mut [T]) -> Result<Self, VecError> {
        Ok(Self {
            items: SliceVec::new(storage)?,
        })
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `VecError::CapacityExceeded` if the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), VecError> {
        self.items.push(item)
    }

    /// Gets a reference to the top element without removing it, or `None`
    /// if empty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of elements on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Capacity, fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }
}

impl<'a, T: Clone> Stack<'a, T> {
    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}
