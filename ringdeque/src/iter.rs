use crate::deque::Deque;

/// Iterator over the elements of a [`Deque`], front to back.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DequeIter<'v, 'a, T> {
    deque: &'v Deque<'a, T>,
    index: usize,
}

impl<'v, 'a, T> DequeIter<'v, 'a, T> {
    pub(crate) fn new(deque: &'v Deque<'a, T>) -> Self {
        Self { deque, index: 0 }
    }
}

impl<'v, 'a, T> Iterator for DequeIter<'v, 'a, T> {
    type Item = &'v T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.deque.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for DequeIter<'_, '_, T> {}
