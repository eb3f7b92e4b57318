use thiserror::Error;

/// Error types for [`Deque`](crate::Deque) and [`Queue`](crate::Queue)
/// operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DequeError {
    /// A push would exceed the fixed capacity
    #[error("Deque full: capacity of {capacity} elements reached")]
    Full {
        /// Capacity of the deque, fixed at construction
        capacity: usize,
    },
    /// Invalid storage provided at construction
    #[error("Invalid initialization: {reason}")]
    InvalidInitialization {
        /// Description of why initialization failed
        reason: &'static str,
    },
}
