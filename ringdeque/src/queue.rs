use crate::deque::Deque;
use crate::error::DequeError;

/// A FIFO queue: [`Deque`] restricted to back-enqueue and front-dequeue.
///
/// Being a wrapper rather than a reimplementation, its boundary behavior
/// (full on enqueue, empty on dequeue) is `Deque`'s by construction.
#[derive(Debug)]
pub struct Queue<'a, T> {
    items: Deque<'a, T>,
}

impl<'a, T> Queue<'a, T> {
    /// Creates a queue over the given storage, with capacity fixed at
    /// `storage.len()`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::InvalidInitialization` if the storage is empty.
    pub fn new(storage: &'a mut [T]) -> Result<Self, DequeError> {
        Ok(Self {
            items: Deque::new(storage)?,
        })
    }

    /// Appends an element at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::Full` if the queue is at capacity.
    pub fn enqueue(&mut self, item: T) -> Result<(), DequeError> {
        self.items.push_back(item)
    }

    /// Gets a reference to the element that would be dequeued next, or
    /// `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of elements in the queue.
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

impl<'a, T: Clone> Queue<'a, T> {
    /// Removes and returns the front element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}
