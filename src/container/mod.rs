//! Concrete [`Sequence`](crate::sequence::Sequence) implementers.
//!
//! - `Vec<T>`: contiguous storage, O(1) amortized append and O(1) reads
//! - `VecDeque<T>`: ring buffer, the same bounds plus cheap front edits
//! - `SmallVec<[T; N]>`: inline storage for up to `N` elements (feature
//!   `smallvec`)
//! - [`LinkedSequence`]: doubly linked nodes kept in an arena
//!
//! # Time Complexity
//!
//! | Operation          | `Vec` / `SmallVec` | `VecDeque`     | `LinkedSequence`  |
//! |--------------------|--------------------|----------------|-------------------|
//! | `add`              | O(1)*              | O(1)*          | O(1)*             |
//! | `add_at`           | O(n)               | O(min(i, n-i)) | O(min(i, n-i))    |
//! | `get`              | O(1)               | O(1)           | O(min(i, n-i))    |
//! | `remove_at`        | O(n)               | O(min(i, n-i)) | O(min(i, n-i))    |
//! | `index_where`      | O(n)               | O(n)           | O(n)              |
//! | `remove_if`        | O(n)               | O(n)           | O(n)              |
//! | `elements` (full)  | O(n)               | O(n)           | O(n)              |
//! | `sort_by`          | O(n log n)         | O(n log n)     | O(n log n)        |
//! | `sorted_search_by` | O(log n)           | O(log n)       | O(n)              |
//!
//! \* amortized
//!
//! All `sort_by` implementations are stable.
//!
//! # Examples
//!
//! ```rust
//! use seqlist::container::LinkedSequence;
//! use seqlist::sequence::Sequence;
//!
//! let mut linked: LinkedSequence<i32> = [1, 2, 3, 4].into_iter().collect();
//! let mut vector = vec![1, 2, 3, 4];
//!
//! assert!(linked.remove_all(&vec![2, 4]));
//! assert!(vector.retain_all(&linked));
//! assert_eq!(vector, vec![1, 3]);
//! ```

mod linked;
#[cfg(feature = "smallvec")]
mod small_vec;
mod vec;
mod vec_deque;

pub use linked::{LinkedSequence, LinkedSequenceIntoIterator, LinkedSequenceIterator};
