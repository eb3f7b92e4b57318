#![no_std]

//! `ringdeque`: a bounded double-ended queue over client-provided buffers.
//!
//! [`Deque`] is a ring buffer borrowing its storage from the caller: all
//! four end operations are O(1), the capacity is fixed at construction,
//! and boundary violations are ordinary return values — `Err` for a push
//! at capacity, `None` for a pop on empty. No allocation, no growth, no
//! internal synchronization.
//!
//! [`Queue`] restricts the deque to FIFO enqueue/dequeue.
//!
//! This crate is `no_std` compatible.
//!
//! ```
//! use ringdeque::Deque;
//!
//! let mut storage = [0i32; 3];
//! let mut deque = Deque::new(&mut storage).unwrap();
//!
//! deque.push_back(2).unwrap();
//! deque.push_back(3).unwrap();
//! deque.push_front(1).unwrap();
//! assert!(deque.push_back(4).is_err()); // at capacity
//!
//! assert_eq!(deque.pop_front(), Some(1));
//! assert_eq!(deque.pop_back(), Some(3));
//! assert_eq!(deque.pop_front(), Some(2));
//! assert_eq!(deque.pop_front(), None);
//! ```
//!
//! Indices wrap modulo the capacity, so a deque used as a sliding window
//! keeps working long past `capacity` total operations:
//!
//! ```
//! use ringdeque::Queue;
//!
//! let mut storage = [0u32; 4];
//! let mut queue = Queue::new(&mut storage).unwrap();
//!
//! for i in 0..100 {
//!     queue.enqueue(i).unwrap();
//!     assert_eq!(queue.dequeue(), Some(i));
//! }
//! assert!(queue.is_empty());
//! ```

mod deque;
mod error;
mod iter;
mod queue;

// Re-export public types
pub use deque::Deque;
pub use error::DequeError;
pub use iter::DequeIter;
pub use queue::Queue;
