//! `Sequence` for `Vec<T>`.

use std::cmp::Ordering;

use crate::condition::Condition;
use crate::error::InsertError;
use crate::sequence::Sequence;

impl<T> Sequence for Vec<T> {
    type Element = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn add(&mut self, element: T) {
        self.push(element);
    }

    fn add_at(&mut self, index: usize, element: T) -> Result<(), InsertError<T>> {
        if index > self.len() {
            return Err(InsertError::new(index, self.len(), element));
        }
        self.insert(index, element);
        Ok(())
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.remove(index))
    }

    fn index_where<C>(&self, condition: C) -> Option<usize>
    where
        C: Condition<T>,
    {
        self.iter().position(|element| condition.test(element))
    }

    fn last_index_where<C>(&self, condition: C) -> Option<usize>
    where
        C: Condition<T>,
    {
        self.iter().rposition(|element| condition.test(element))
    }

    fn remove_if<C>(&mut self, condition: C) -> bool
    where
        C: Condition<T>,
    {
        let before = self.len();
        self.retain(|element| !condition.test(element));
        self.len() != before
    }

    fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(comparator);
    }

    fn sorted_search_by<F>(&self, pattern: &T, mut comparator: F) -> Result<usize, usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_slice()
            .binary_search_by(|element| comparator(element, pattern))
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}
