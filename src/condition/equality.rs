//! The equality condition used by pattern-based search and removal.

use super::Condition;

/// Satisfied by elements equal to a borrowed pattern.
///
/// `contains`, `index_of`, `last_index_of` and `remove_first` build one of
/// these around their pattern and hand it to the predicate-based primitives.
/// The result is only as meaningful as the element type's `PartialEq`: an
/// equality that is not reflexive, symmetric and transitive gives
/// unspecified search results.
///
/// # Examples
///
/// ```rust
/// use seqlist::condition::{Condition, EqualTo};
///
/// let pattern = String::from("needle");
/// let condition = EqualTo::new(&pattern);
/// assert!(condition.test(&String::from("needle")));
/// assert!(!condition.test(&String::from("hay")));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct EqualTo<'a, T: ?Sized> {
    pattern: &'a T,
}

impl<'a, T: ?Sized> EqualTo<'a, T> {
    /// Captures `pattern` for the duration of one search.
    #[inline]
    pub const fn new(pattern: &'a T) -> Self {
        Self { pattern }
    }

    /// Returns the captured pattern.
    #[inline]
    pub const fn pattern(&self) -> &'a T {
        self.pattern
    }
}

impl<T: ?Sized> Clone for EqualTo<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for EqualTo<'_, T> {}

impl<T: PartialEq + ?Sized> Condition<T> for EqualTo<'_, T> {
    #[inline]
    fn test(&self, element: &T) -> bool {
        element == self.pattern
    }
}
