//! `Sequence` for `SmallVec<[T; N]>`.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::condition::Condition;
use crate::error::InsertError;
use crate::sequence::Sequence;

impl<T, const N: usize> Sequence for SmallVec<[T; N]> {
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

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use rstest::rstest;
    use smallvec::{SmallVec, smallvec};

    #[rstest]
    fn test_growing_past_inline_capacity() {
        let mut values: SmallVec<[i32; 2]> = smallvec![1, 2];
        assert!(!values.spilled());
        Sequence::add(&mut values, 3);
        assert!(values.spilled());
        assert_eq!(values.index_of(&3), Some(2));
    }

    #[rstest]
    fn test_remove_if_on_inline_storage() {
        let mut values: SmallVec<[i32; 4]> = smallvec![1, 2, 3, 4];
        assert!(values.remove_if(|value: &i32| *value > 2));
        assert_eq!(values.as_slice(), &[1, 2]);
    }
}
