//! The ordered-sequence contract and the operations derived from it.
//!
//! This module provides the [`Sequence`] trait. A concrete container supplies
//! a small set of primitives; every richer operation is a provided method
//! written only in terms of those primitives and a [`Condition`].
//!
//! # Failure signaling
//!
//! Invalid positions and failed searches are ordinary outcomes, not panics:
//!
//! | Situation                         | Result                         |
//! |-----------------------------------|--------------------------------|
//! | read/remove at `index >= size`    | `None`                         |
//! | insert at `index > size`          | `Err(InsertError)`             |
//! | no element matches                | `None`                         |
//! | sorted search misses              | `Err(insertion_point)`         |
//!
//! # Examples
//!
//! ```rust
//! use seqlist::sequence::Sequence;
//!
//! let mut numbers = vec![3, 1, 2];
//! Sequence::sort(&mut numbers);
//! assert_eq!(numbers, vec![1, 2, 3]);
//! assert_eq!(numbers.sorted_search(&2), Ok(1));
//! assert_eq!(numbers.sorted_search(&5), Err(3));
//!
//! let mut all = vec![1, 2, 3, 4];
//! assert!(all.retain_all(&vec![2, 4]));
//! assert_eq!(all, vec![2, 4]);
//! ```

mod conformance;
mod elements;
mod search;

pub use elements::Elements;
pub use search::{binary_search_by_index, decode_search_result, encode_search_result};

use std::cmp::Ordering;
use std::hash::Hash;

use crate::condition::{Condition, ConditionExt, EqualTo, MemberOf, MemberOfSet, NotMemberOf};
use crate::error::InsertError;

/// An indexable, mutable, finite sequence of elements.
///
/// Positions are contiguous and zero based: `0..size()`. After [`clear`]
/// the size is exactly zero.
///
/// # Required Methods
///
/// - `add`, `add_at`: Append and positional insert
/// - `size`, `get`: Size and positional read
/// - `remove_at`: Positional removal
/// - `index_where`, `last_index_where`: First/last match of a condition
/// - `remove_if`: Removal of every match of a condition
/// - `sort_by`, `sorted_search_by`: Comparator sort and binary search
/// - `clear`: Removal of everything
/// - `elements`: Read-only traversal in index order through the container's
///   own cursor
///
/// # Provided Methods
///
/// All other methods have default implementations based on the primitives:
///
/// - `contains`, `index_of`, `last_index_of`: Equality search via [`EqualTo`]
/// - `contains_where`: Existence of a match
/// - `remove_first`: Removal of the first equal element
/// - `remove_all`, `retain_all`: Bulk removal via [`MemberOf`]/[`NotMemberOf`]
/// - `remove_all_hashed`, `retain_all_hashed`: Bulk removal via [`MemberOfSet`]
/// - `remove_all_own`: Removal of a sequence from itself
/// - `sort`, `sorted_search`: Natural-order sort and search
/// - `is_empty`: Emptiness
///
/// Implementers may override any provided method for a better bound as long
/// as the observable behavior is unchanged.
///
/// # Complexity
///
/// Derived searches cost one scan of the sequence. `remove_all` and
/// `retain_all` cost O(N × M) because each membership test scans `others`.
/// The `_hashed` variants index `others` once through
/// [`elements`](Sequence::elements) and cost O(N + M), provided
/// `elements` walks the container in O(M). Every bundled container meets
/// that bound; a container that can only offer positional reads may use
/// [`Elements`], at the cost of one `get` per step.
///
/// [`clear`]: Sequence::clear
pub trait Sequence {
    /// The type of the stored elements.
    type Element;

    /// The borrowing iterator returned by [`elements`](Sequence::elements).
    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Appends `element` at the end.
    fn add(&mut self, element: Self::Element);

    /// Inserts `element` at `index`, shifting later elements up by one.
    ///
    /// Succeeds for `index <= size()`. Otherwise the sequence is unchanged
    /// and the element is returned inside the error.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError`] when `index > size()`.
    fn add_at(&mut self, index: usize, element: Self::Element)
    -> Result<(), InsertError<Self::Element>>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns the element at `index`, or `None` if `index >= size()`.
    fn get(&self, index: usize) -> Option<&Self::Element>;

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one. Returns `None` and leaves the sequence unchanged if
    /// `index >= size()`.
    fn remove_at(&mut self, index: usize) -> Option<Self::Element>;

    /// Returns the smallest index whose element satisfies `condition`.
    ///
    /// Elements are tested in increasing index order and the scan stops at
    /// the first match.
    fn index_where<C>(&self, condition: C) -> Option<usize>
    where
        C: Condition<Self::Element>;

    /// Returns the largest index whose element satisfies `condition`.
    ///
    /// Elements are tested in decreasing index order and the scan stops at
    /// the first match.
    fn last_index_where<C>(&self, condition: C) -> Option<usize>
    where
        C: Condition<Self::Element>;

    /// Removes every element satisfying `condition`, keeping the relative
    /// order of the rest. Each element is tested exactly once.
    ///
    /// Returns `true` if at least one element was removed.
    fn remove_if<C>(&mut self, condition: C) -> bool
    where
        C: Condition<Self::Element>;

    /// Sorts the elements into non-decreasing order per `comparator`.
    ///
    /// `comparator` must be a total preorder.
    fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering;

    /// Binary searches for `pattern` in a sequence sorted by `comparator`.
    ///
    /// `comparator` is called as `comparator(element, pattern)`. Returns
    /// `Ok(index)` of a matching element (any one of several equal
    /// elements), or `Err(insertion_point)` where `pattern` could be
    /// inserted while keeping the order. On an unsorted sequence the result
    /// is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `Err(insertion_point)` when no element compares equal.
    fn sorted_search_by<F>(&self, pattern: &Self::Element, comparator: F) -> Result<usize, usize>
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering;

    /// Removes every element. Afterwards `size() == 0`.
    fn clear(&mut self);

    /// Returns an iterator over the elements in index order.
    ///
    /// A full traversal must cost O(size); implementers walk their own
    /// storage rather than calling `get` per position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::sequence::Sequence;
    /// use std::collections::VecDeque;
    ///
    /// let deque: VecDeque<i32> = (1..=3).collect();
    /// let doubled: Vec<i32> = deque.elements().map(|value| value * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn elements(&self) -> Self::Iter<'_>;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if some element equals `pattern`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::sequence::Sequence;
    ///
    /// let names = vec!["ada", "grace"];
    /// assert!(Sequence::contains(&names, &"ada"));
    /// assert!(!Sequence::contains(&names, &"alan"));
    /// ```
    #[inline]
    fn contains(&self, pattern: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.index_where(EqualTo::new(pattern)).is_some()
    }

    /// Returns the index of the first element equal to `pattern`.
    #[inline]
    fn index_of(&self, pattern: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.index_where(EqualTo::new(pattern))
    }

    /// Returns the index of the last element equal to `pattern`.
    #[inline]
    fn last_index_of(&self, pattern: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.last_index_where(EqualTo::new(pattern))
    }

    /// Returns `true` if some element satisfies `condition`.
    #[inline]
    fn contains_where<C>(&self, condition: C) -> bool
    where
        C: Condition<Self::Element>,
    {
        self.index_where(condition).is_some()
    }

    /// Removes and returns the first element equal to `pattern`.
    ///
    /// Returns `None` if there is no such element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::sequence::Sequence;
    ///
    /// let mut values = vec![1, 2, 1];
    /// assert_eq!(values.remove_first(&1), Some(1));
    /// assert_eq!(values, vec![2, 1]);
    /// assert_eq!(values.remove_first(&7), None);
    /// ```
    fn remove_first(&mut self, pattern: &Self::Element) -> Option<Self::Element>
    where
        Self::Element: PartialEq,
    {
        let index = self.index_of(pattern)?;
        self.remove_at(index)
    }

    /// Removes every element that `others` contains.
    ///
    /// Returns `true` if at least one element was removed. Each membership
    /// test calls `others.contains`, so the cost is O(N × M) unless `others`
    /// overrides `contains`. See [`remove_all_hashed`] for O(N + M).
    ///
    /// A sequence can never be passed to its own `remove_all`; use
    /// [`remove_all_own`] for that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::sequence::Sequence;
    ///
    /// let mut values = vec![1, 2, 3, 4];
    /// assert!(values.remove_all(&vec![2, 4]));
    /// assert_eq!(values, vec![1, 3]);
    /// assert!(!values.remove_all(&vec![9]));
    /// ```
    ///
    /// [`remove_all_hashed`]: Sequence::remove_all_hashed
    /// [`remove_all_own`]: Sequence::remove_all_own
    fn remove_all<S>(&mut self, others: &S) -> bool
    where
        S: Sequence<Element = Self::Element> + ?Sized,
        Self::Element: PartialEq,
    {
        let before = self.size();
        let removed = self.remove_if(MemberOf::new(others));
        tracing::trace!(before, after = self.size(), others = others.size(), "remove_all");
        removed
    }

    /// Removes every element of this sequence from itself.
    ///
    /// This is `remove_all` with `others` being the sequence itself: the
    /// sequence is cleared and `true` is reported, without running the
    /// membership scan over a collection that is being mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::sequence::Sequence;
    ///
    /// let mut values = vec![5, 6];
    /// assert!(values.remove_all_own());
    /// assert!(Sequence::is_empty(&values));
    /// ```
    fn remove_all_own(&mut self) -> bool {
        tracing::debug!(size = self.size(), "remove_all on itself, clearing");
        self.clear();
        true
    }

    /// Removes every element that `others` does not contain.
    ///
    /// Returns `true` if at least one element was removed. Same cost as
    /// [`remove_all`](Sequence::remove_all).
    fn retain_all<S>(&mut self, others: &S) -> bool
    where
        S: Sequence<Element = Self::Element> + ?Sized,
        Self::Element: PartialEq,
    {
        let before = self.size();
        let removed = self.remove_if(NotMemberOf::new(others));
        tracing::trace!(before, after = self.size(), others = others.size(), "retain_all");
        removed
    }

    /// [`remove_all`](Sequence::remove_all) through a hash index of `others`.
    ///
    /// Indexes `others` once, then tests each element in expected O(1).
    fn remove_all_hashed<S>(&mut self, others: &S) -> bool
    where
        S: Sequence<Element = Self::Element> + ?Sized,
        Self::Element: Hash + Eq,
    {
        let index = MemberOfSet::from_sequence(others);
        let before = self.size();
        let removed = self.remove_if(index);
        tracing::trace!(before, after = self.size(), others = others.size(), "remove_all_hashed");
        removed
    }

    /// [`retain_all`](Sequence::retain_all) through a hash index of `others`.
    fn retain_all_hashed<S>(&mut self, others: &S) -> bool
    where
        S: Sequence<Element = Self::Element> + ?Sized,
        Self::Element: Hash + Eq,
    {
        let index = MemberOfSet::from_sequence(others);
        let before = self.size();
        let removed = self.remove_if(index.negate());
        tracing::trace!(before, after = self.size(), others = others.size(), "retain_all_hashed");
        removed
    }

    /// Sorts the elements into their natural order.
    #[inline]
    fn sort(&mut self)
    where
        Self::Element: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Binary searches for `pattern` in a sequence sorted by natural order.
    ///
    /// # Errors
    ///
    /// Returns `Err(insertion_point)` when `pattern` is absent.
    #[inline]
    fn sorted_search(&self, pattern: &Self::Element) -> Result<usize, usize>
    where
        Self::Element: Ord,
    {
        self.sorted_search_by(pattern, Ord::cmp)
    }
}
