use thiserror::Error;

/// Error types for [`SliceVec`](crate::SliceVec), [`HeapVec`](crate::HeapVec)
/// and [`Stack`](crate::Stack) operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VecError {
    /// A push would exceed the fixed capacity
    #[error("Capacity exceeded: vector is full at {capacity} elements")]
    CapacityExceeded {
        /// Capacity of the vector, fixed at construction
        capacity: usize,
    },
    /// Invalid parameters or storage provided at construction
    #[error("Invalid initialization: {reason}")]
    InvalidInitialization {
        /// Description of why initialization failed
        reason: &'static str,
    },
    /// The allocator could not provide storage for a growable vector
    #[error("Allocation failed: could not reserve space for {additional} more elements")]
    AllocationFailed {
        /// Number of additional element slots requested
        additional: usize,
    },
}
