//! Membership conditions used by `remove_all` and `retain_all`.
//!
//! [`MemberOf`] and [`NotMemberOf`] ask the other sequence directly, which
//! costs one linear scan of that sequence per tested element. Bulk removal
//! through them is therefore O(N × M). [`MemberOfSet`] indexes the other
//! sequence once in a hash set and answers each test in expected O(1).

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use super::Condition;
use crate::sequence::Sequence;

/// The hasher used by [`MemberOfSet`].
///
/// `rustc_hash::FxBuildHasher` with the `fxhash` feature,
/// `ahash::RandomState` with the `ahash` feature, and the standard
/// `RandomState` otherwise. `fxhash` takes precedence when both are enabled.
#[cfg(feature = "fxhash")]
pub type MembershipHasher = rustc_hash::FxBuildHasher;

/// The hasher used by [`MemberOfSet`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type MembershipHasher = ahash::RandomState;

/// The hasher used by [`MemberOfSet`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type MembershipHasher = std::collections::hash_map::RandomState;

/// Satisfied by elements that the borrowed sequence contains.
///
/// # Complexity
///
/// Each test costs whatever `others.contains` costs, which is O(M) for the
/// derived implementation.
///
/// # Examples
///
/// ```rust
/// use seqlist::condition::{Condition, MemberOf};
///
/// let others = vec![2, 4];
/// let condition = MemberOf::new(&others);
/// assert!(condition.test(&4));
/// assert!(!condition.test(&3));
/// ```
pub struct MemberOf<'a, S: ?Sized> {
    others: &'a S,
}

impl<'a, S: ?Sized> MemberOf<'a, S> {
    /// Captures `others` for the duration of one bulk operation.
    #[inline]
    pub const fn new(others: &'a S) -> Self {
        Self { others }
    }
}

impl<S> Condition<S::Element> for MemberOf<'_, S>
where
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    #[inline]
    fn test(&self, element: &S::Element) -> bool {
        self.others.contains(element)
    }
}

/// Satisfied by elements that the borrowed sequence does not contain.
///
/// The negation of [`MemberOf`], with the same cost.
///
/// # Examples
///
/// ```rust
/// use seqlist::condition::{Condition, NotMemberOf};
///
/// let others = vec![2, 4];
/// let condition = NotMemberOf::new(&others);
/// assert!(condition.test(&3));
/// assert!(!condition.test(&2));
/// ```
pub struct NotMemberOf<'a, S: ?Sized> {
    others: &'a S,
}

impl<'a, S: ?Sized> NotMemberOf<'a, S> {
    /// Captures `others` for the duration of one bulk operation.
    #[inline]
    pub const fn new(others: &'a S) -> Self {
        Self { others }
    }
}

impl<S> Condition<S::Element> for NotMemberOf<'_, S>
where
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    #[inline]
    fn test(&self, element: &S::Element) -> bool {
        !self.others.contains(element)
    }
}

macro_rules! impl_borrowing_debug {
    ($($name:ident),*) => {
        $(
            impl<S: fmt::Debug + ?Sized> fmt::Debug for $name<'_, S> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter
                        .debug_struct(stringify!($name))
                        .field("others", &self.others)
                        .finish()
                }
            }

            impl<S: ?Sized> Clone for $name<'_, S> {
                #[inline]
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<S: ?Sized> Copy for $name<'_, S> {}
        )*
    };
}

impl_borrowing_debug!(MemberOf, NotMemberOf);

/// Satisfied by elements found in a hash index of another collection.
///
/// Building the index borrows every element of the other collection once;
/// each test afterwards is an expected O(1) hash lookup, so bulk removal
/// through this condition is O(N + M).
///
/// # Examples
///
/// ```rust
/// use seqlist::condition::{Condition, MemberOfSet};
///
/// let others = vec!["b", "d"];
/// let index = MemberOfSet::from_sequence(&others);
/// assert_eq!(index.len(), 2);
/// assert!(index.test(&"d"));
/// assert!(!index.test(&"c"));
/// ```
pub struct MemberOfSet<'a, T> {
    index: HashSet<&'a T, MembershipHasher>,
}

impl<'a, T: Hash + Eq> MemberOfSet<'a, T> {
    /// Indexes every element of `others`.
    pub fn from_sequence<S>(others: &'a S) -> Self
    where
        S: Sequence<Element = T> + ?Sized,
    {
        let mut index =
            HashSet::with_capacity_and_hasher(others.size(), MembershipHasher::default());
        index.extend(others.elements());
        Self { index }
    }

    /// Returns the number of distinct indexed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if nothing was indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<'a, T: Hash + Eq> FromIterator<&'a T> for MemberOfSet<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        let mut index = HashSet::with_hasher(MembershipHasher::default());
        index.extend(iter);
        Self { index }
    }
}

impl<T: Hash + Eq> Condition<T> for MemberOfSet<'_, T> {
    #[inline]
    fn test(&self, element: &T) -> bool {
        self.index.contains(element)
    }
}

impl<T: fmt::Debug> fmt::Debug for MemberOfSet<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemberOfSet")
            .field("len", &self.index.len())
            .finish_non_exhaustive()
    }
}
