//! # seqlist
//!
//! An ordered-sequence contract whose richer operations are derived from a
//! handful of primitives.
//!
//! ## Overview
//!
//! A concrete container implements the [`Sequence`](sequence::Sequence)
//! primitives (append, positional insert/read/remove, size, clear,
//! predicate search, predicate removal, comparator sort and comparator
//! sorted search). Everything else comes for free:
//!
//! - **Conditions**: predicates over elements, closures included, with
//!   equality and membership adapters and `negate`/`and`/`or` combinators
//! - **Derived operations**: `contains`, `index_of`, `last_index_of`,
//!   `remove_first`, `remove_all`, `retain_all`, `sort`, `sorted_search`
//! - **Containers**: `Vec`, `VecDeque`, `SmallVec` and the arena-backed
//!   [`LinkedSequence`](container::LinkedSequence)
//!
//! ## Feature Flags
//!
//! - `condition`: Condition trait and predicate adapters
//! - `sequence`: The `Sequence` contract and derived operations
//! - `container`: Implementations for `Vec`, `VecDeque` and `LinkedSequence`
//! - `smallvec`: Implementation for `SmallVec`
//! - `serde`: Serialization for `LinkedSequence`
//! - `fxhash` / `ahash`: Faster hashers for hashed membership tests
//! - `full`: Enable all features except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut numbers = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! numbers.remove_all(&vec![1, 9]);
//! assert_eq!(numbers, vec![3, 4, 5, 2, 6]);
//!
//! Sequence::sort(&mut numbers);
//! assert_eq!(numbers.sorted_search(&5), Ok(3));
//! assert_eq!(numbers.sorted_search(&7), Err(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits needed to call derived operations.
///
/// # Usage
///
/// ```rust
/// use seqlist::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "condition")]
    pub use crate::condition::{Condition, ConditionExt};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::Sequence;

    #[cfg(feature = "container")]
    pub use crate::container::LinkedSequence;

    pub use crate::error::InsertError;
}

pub mod error;

#[cfg(feature = "condition")]
pub mod condition;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "container")]
pub mod container;

#[doc(hidden)]
pub use paste;
