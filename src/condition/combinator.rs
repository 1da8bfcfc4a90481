//! Logical combinators over conditions.

use super::Condition;

/// The negation of a condition.
///
/// Created by [`ConditionExt::negate`](super::ConditionExt::negate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<C> {
    inner: C,
}

impl<C> Not<C> {
    /// Wraps `inner` so that its result is inverted.
    #[inline]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped condition.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: ?Sized, C: Condition<T>> Condition<T> for Not<C> {
    #[inline]
    fn test(&self, element: &T) -> bool {
        !self.inner.test(element)
    }
}

/// The short-circuiting conjunction of two conditions.
///
/// Created by [`ConditionExt::and`](super::ConditionExt::and).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    /// Combines `first` and `second`; `second` is only consulted when `first` holds.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Condition<T>, B: Condition<T>> Condition<T> for And<A, B> {
    #[inline]
    fn test(&self, element: &T) -> bool {
        self.first.test(element) && self.second.test(element)
    }
}

/// The short-circuiting disjunction of two conditions.
///
/// Created by [`ConditionExt::or`](super::ConditionExt::or).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B> {
    /// Combines `first` and `second`; `second` is only consulted when `first` fails.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Condition<T>, B: Condition<T>> Condition<T> for Or<A, B> {
    #[inline]
    fn test(&self, element: &T) -> bool {
        self.first.test(element) || self.second.test(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionExt;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_not_inverts() {
        let positive = Not::new(|value: &i32| *value <= 0);
        assert!(positive.test(&1));
        assert!(!positive.test(&0));
    }

    #[rstest]
    fn test_double_negation_is_identity() {
        let even = |value: &i32| value % 2 == 0;
        let same = even.negate().negate();
        for value in -4..4 {
            assert_eq!(same.test(&value), even(&value));
        }
    }

    #[rstest]
    fn test_and_short_circuits() {
        let calls = Cell::new(0);
        let never = |_: &i32| false;
        let counted = |_: &i32| {
            calls.set(calls.get() + 1);
            true
        };
        assert!(!And::new(never, counted).test(&1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_short_circuits() {
        let calls = Cell::new(0);
        let always = |_: &i32| true;
        let counted = |_: &i32| {
            calls.set(calls.get() + 1);
            false
        };
        assert!(Or::new(always, counted).test(&1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_not_into_inner() {
        let inner = Not::new(7).into_inner();
        assert_eq!(inner, 7);
    }
}
