//! `Sequence` for `VecDeque<T>`.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::condition::Condition;
use crate::error::InsertError;
use crate::sequence::Sequence;

impl<T> Sequence for VecDeque<T> {
    type Element = T;
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn add(&mut self, element: T) {
        self.push_back(element);
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
        Self::get(self, index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.remove(index)
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
        self.make_contiguous().sort_by(comparator);
    }

    fn sorted_search_by<F>(&self, pattern: &T, mut comparator: F) -> Result<usize, usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.binary_search_by(|element| comparator(element, pattern))
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use rstest::rstest;
    use std::collections::VecDeque;

    /// A deque whose contents wrap around the end of its buffer.
    fn wrapped() -> VecDeque<i32> {
        let mut deque = VecDeque::with_capacity(4);
        deque.extend([0, 0, 5, 3]);
        deque.pop_front();
        deque.pop_front();
        deque.push_back(9);
        deque.push_back(1);
        deque
    }

    #[rstest]
    fn test_sort_wrapped_deque() {
        let mut deque = wrapped();
        Sequence::sort(&mut deque);
        assert_eq!(deque, VecDeque::from(vec![1, 3, 5, 9]));
        assert_eq!(deque.sorted_search(&5), Ok(2));
    }

    #[rstest]
    fn test_add_at_front_of_wrapped_deque() {
        let mut deque = wrapped();
        assert!(deque.add_at(0, 7).is_ok());
        assert_eq!(deque.index_of(&7), Some(0));
        assert_eq!(deque.last_index_of(&1), Some(4));
    }

    #[rstest]
    fn test_remove_at_out_of_bounds() {
        let mut deque = wrapped();
        assert_eq!(deque.remove_at(4), None);
        assert_eq!(deque.size(), 4);
    }

    #[rstest]
    fn test_elements_follow_logical_order_when_wrapped() {
        let deque = wrapped();
        assert!(deque.elements().eq([5, 3, 9, 1].iter()));
        assert!(deque.elements().rev().eq([1, 9, 3, 5].iter()));
    }
}
