//! Conditions: single-argument predicates over sequence elements.
//!
//! A [`Condition`] is what the predicate-based primitives of a sequence
//! (`index_where`, `last_index_where`, `remove_if`) are parameterized by.
//! Any closure `Fn(&T) -> bool` is a condition, so ad-hoc predicates need no
//! dedicated type. The named adapters in this module cover the conditions the
//! derived operations build internally:
//!
//! - [`EqualTo`]: equal to a captured pattern
//! - [`MemberOf`]: found in another sequence
//! - [`NotMemberOf`]: absent from another sequence
//! - [`MemberOfSet`]: found in a hash index of another sequence
//!
//! Conditions compose through [`ConditionExt`]:
//!
//! - [`ConditionExt::negate`] produces [`Not`]
//! - [`ConditionExt::and`] produces [`And`]
//! - [`ConditionExt::or`] produces [`Or`]
//!
//! # Examples
//!
//! ```rust
//! use seqlist::condition::{Condition, ConditionExt, EqualTo};
//!
//! let even = |value: &i32| value % 2 == 0;
//! let small = |value: &i32| *value < 10;
//!
//! let small_even = even.and(small);
//! assert!(small_even.test(&4));
//! assert!(!small_even.test(&12));
//!
//! let not_three = EqualTo::new(&3).negate();
//! assert!(not_three.test(&4));
//! assert!(!not_three.test(&3));
//! ```

mod combinator;
mod equality;
#[cfg(feature = "sequence")]
mod membership;

pub use combinator::{And, Not, Or};
pub use equality::EqualTo;
#[cfg(feature = "sequence")]
pub use membership::{MemberOf, MemberOfSet, MembershipHasher, NotMemberOf};

/// A single-argument boolean test over an element.
///
/// Conditions are built immediately before a search or removal and live no
/// longer than that call. They may capture a pattern or another collection by
/// reference, but carry no state from one call to the next.
///
/// # Laws
///
/// A condition must be deterministic for the duration of one call:
///
/// ```text
/// condition.test(x) == condition.test(x)
/// ```
///
/// # Examples
///
/// ```rust
/// use seqlist::condition::Condition;
///
/// let positive = |value: &i64| *value > 0;
/// assert!(positive.test(&5));
/// assert!(!positive.test(&-5));
/// ```
pub trait Condition<T: ?Sized> {
    /// Returns `true` if `element` satisfies this condition.
    fn test(&self, element: &T) -> bool;
}

impl<T, F> Condition<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, element: &T) -> bool {
        self(element)
    }
}

/// Combinators available on every [`Condition`].
///
/// The element type is a trait parameter so that closures, whose argument
/// type is only known from context, can still be combined.
pub trait ConditionExt<T: ?Sized>: Condition<T> + Sized {
    /// Returns the logical negation of this condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::condition::{Condition, ConditionExt};
    ///
    /// let odd = (|value: &u8| value % 2 == 0).negate();
    /// assert!(odd.test(&3));
    /// ```
    #[inline]
    fn negate(self) -> Not<Self> {
        Not::new(self)
    }

    /// Returns a condition satisfied when both this and `other` hold.
    ///
    /// `other` is not evaluated when this condition fails.
    #[inline]
    fn and<C>(self, other: C) -> And<Self, C>
    where
        C: Condition<T>,
    {
        And::new(self, other)
    }

    /// Returns a condition satisfied when this or `other` holds.
    ///
    /// `other` is not evaluated when this condition succeeds.
    #[inline]
    fn or<C>(self, other: C) -> Or<Self, C>
    where
        C: Condition<T>,
    {
        Or::new(self, other)
    }
}

impl<T: ?Sized, C: Condition<T>> ConditionExt<T> for C {}
