//! Positional iteration for sequences without a native cursor.

use std::fmt;
use std::iter::FusedIterator;

use super::Sequence;

/// An iterator over the elements of a [`Sequence`], in index order, built
/// on [`Sequence::get`].
///
/// Each step costs one positional read. A container with O(1) `get` can
/// return this from [`Sequence::elements`]; a container whose `get` walks
/// its storage must return its own cursor instead, or a full traversal
/// becomes quadratic.
///
/// # Examples
///
/// ```rust
/// use seqlist::sequence::Elements;
///
/// let values = vec![1, 2, 3];
/// let reversed: Vec<&i32> = Elements::new(&values).rev().collect();
/// assert_eq!(reversed, vec![&3, &2, &1]);
/// ```
pub struct Elements<'a, S: ?Sized> {
    sequence: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Elements<'a, S> {
    /// Positions an iterator over the whole of `sequence`.
    pub fn new(sequence: &'a S) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.size(),
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Elements<'a, S> {
    type Item = &'a S::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.sequence.get(self.front);
        self.front += 1;
        element
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Elements<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.get(self.back)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Elements<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for Elements<'_, S> {}

impl<S: ?Sized> Clone for Elements<'_, S> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: ?Sized> fmt::Debug for Elements<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Elements")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}
