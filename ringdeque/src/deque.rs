use crate::error::DequeError;
use crate::iter::DequeIter;

/// A bounded double-ended queue: a ring buffer over client-provided
/// storage.
///
/// All four end operations are O(1). The capacity is `storage.len()`,
/// fixed forever; pushes at capacity fail with [`DequeError::Full`] and
/// pops on an empty deque return `None`. Indices wrap modulo the capacity,
/// so long push/pop sequences reuse the storage without any shifting.
#[derive(Debug)]
pub struct Deque<'a, T> {
    storage: &'a mut [T],
    head: usize,
    len: usize,
}

impl<'a, T> Deque<'a, T> {
    /// Creates a deque over the given storage, with capacity fixed at
    /// `storage.len()`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::InvalidInitialization` if the storage is empty.
    pub fn new(storage: &'a mut [T]) -> Result<Self, DequeError> {
        if storage.is_empty() {
            return Err(DequeError::InvalidInitialization {
                reason: "storage must hold at least one element",
            });
        }
        Ok(Self {
            storage,
            head: 0,
            len: 0,
        })
    }

    /// Physical slot of the logical index `i`, counted from the front.
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % self.storage.len()
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::Full` if the deque is at capacity.
    pub fn push_back(&mut self, item: T) -> Result<(), DequeError> {
        if self.len >= self.storage.len() {
            return Err(DequeError::Full {
                capacity: self.storage.len(),
            });
        }
        let tail = self.slot(self.len);
        self.storage[tail] = item;
        self.len += 1;
        Ok(())
    }

    /// Prepends an element at the front.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::Full` if the deque is at capacity.
    pub fn push_front(&mut self, item: T) -> Result<(), DequeError> {
        if self.len >= self.storage.len() {
            return Err(DequeError::Full {
                capacity: self.storage.len(),
            });
        }
        self.head = if self.head == 0 {
            self.storage.len() - 1
        } else {
            self.head - 1
        };
        self.storage[self.head] = item;
        self.len += 1;
        Ok(())
    }

    /// Gets a reference to the front element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.storage.get(self.head)
    }

    /// Gets a reference to the back element, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.storage.get(self.slot(self.len - 1))
    }

    /// Gets a reference to the element at logical `index`, counted from
    /// the front.
    ///
    /// Returns `None` if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.storage.get(self.slot(index))
    }

    /// Removes all elements without touching the storage.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Number of elements in the deque.
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

    /// `true` once a further push at either end would fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len >= self.storage.len()
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> DequeIter<'_, 'a, T> {
        self.into_iter()
    }
}

impl<'a, T: Clone> Deque<'a, T> {
    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.storage[self.head].clone();
        self.head = (self.head + 1) % self.storage.len();
        self.len -= 1;
        Some(item)
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.slot(self.len - 1);
        self.len -= 1;
        Some(self.storage[tail].clone())
    }
}

impl<'v, 'a, T> IntoIterator for &'v Deque<'a, T> {
    type Item = &'v T;
    type IntoIter = DequeIter<'v, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DequeIter::new(self)
    }
}
