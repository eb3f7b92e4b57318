#![no_std]

//! `slotvec`: bounded vectors with ownership made explicit in the type.
//!
//! Two vector types cover the two storage disciplines, so that "fixed
//! buffer" and "growable heap" cannot be confused at runtime:
//!
//! - [`SliceVec`] borrows client-provided storage; its capacity is fixed
//!   forever and a push into a full vector fails with
//!   [`VecError::CapacityExceeded`] — it never reallocates.
//! - [`HeapVec`] owns its storage and grows by doubling; growth is fallible
//!   and a failed growth leaves the vector untouched.
//!
//! [`Stack`] restricts `SliceVec` to LIFO push/pop/peek.
//!
//! Every boundary condition is an ordinary return value — `Result` for
//! pushes, `Option` for pops and indexed access — never a sentinel and
//! never a panic on a checked path.
//!
//! This crate is `no_std` compatible; only `HeapVec` touches the heap.
//!
//! ```
//! use slotvec::SliceVec;
//!
//! let mut storage = [0i32; 3];
//! let mut vec = SliceVec::new(&mut storage).unwrap();
//!
//! vec.push(1).unwrap();
//! vec.push(2).unwrap();
//! vec.push(3).unwrap();
//! assert!(vec.push(4).is_err()); // full: fails, never grows
//!
//! assert_eq!(vec.pop(), Some(3));
//! assert_eq!(vec.pop(), Some(2));
//! assert_eq!(vec.pop(), Some(1));
//! assert_eq!(vec.pop(), None);
//! ```
//!
//! Checked access returns `Option`; combinators replace sentinel checks:
//!
//! ```
//! use slotvec::SliceVec;
//!
//! let mut storage = [0i32; 4];
//! let mut vec = SliceVec::new(&mut storage).unwrap();
//! vec.push(5).unwrap();
//!
//! assert_eq!(vec.get(0).map(|v| v + 1).unwrap_or(0), 6);
//! assert_eq!(vec.get(7).copied().unwrap_or(-1), -1);
//! ```
//!
//! ```
//! use slotvec::HeapVec;
//!
//! let mut vec = HeapVec::new();
//! for i in 0..1000 {
//!     vec.push(i).unwrap();
//! }
//! assert_eq!(vec.len(), 1000);
//! assert_eq!(vec.get(999), Some(&999));
//! ```

extern crate alloc;

mod error;
mod heap_vec;
mod slice_vec;
mod stack;

// Re-export public types
pub use error::VecError;
pub use heap_vec::HeapVec;
pub use slice_vec::SliceVec;
pub use stack::Stack;
