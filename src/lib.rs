//! Unordered set of unique elements, usable either directly or behind a mutex.
//!
//! ```
//! use uset::{Set, SetKind};
//!
//! let mut s = uset::new_set(SetKind::ThreadSafe, [1, 2]);
//! s.add([3]);
//! s.remove([&1]);
//! assert_eq!(s.len(), 2);
//! assert!(s.is_equal(&uset::new_set(SetKind::NonThreadSafe, [3, 2])));
//! ```

/// Factory settings and their on-disk format.
pub mod config;

/// Creation of sets of the requested flavour.
pub mod factory;

/// The set itself and the operations every flavour supports.
pub mod set;

/// Lock-guarded wrapper for sharing a set between threads.
pub mod sync;

mod error;

#[cfg(test)]
mod testutils;

pub use config::{Config, SetKind};
pub use error::Error;
pub use factory::{AnySet, from_config, new_set};
pub use set::{Set, UnorderedSet};
pub use sync::SyncSet;
