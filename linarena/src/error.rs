use thiserror::Error;

/// Error types for [`Arena`](crate::Arena) construction
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ArenaError {
    /// An empty buffer was provided to `Arena::new`
    #[error("Empty buffer: an arena needs at least 1 byte of backing storage")]
    EmptyBuffer,
}

/// Error types for [`Pool`](crate::Pool) construction
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PoolError {
    /// Invalid parameters provided to `Pool::new`
    #[error("Invalid pool initialization: {reason}")]
    InvalidInitialization {
        /// Description of why initialization failed
        reason: &'static str,
    },
    /// The backing arena does not have room for the requested pool
    #[error("Arena too small: pool needs {required} bytes, but only {remaining} bytes remain")]
    ArenaTooSmall {
        /// Bytes the pool would need (aligned object size times capacity)
        required: usize,
        /// Bytes remaining in the backing arena
        remaining: usize,
    },
}
