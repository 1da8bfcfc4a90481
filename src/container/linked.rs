//! Doubly linked sequence with arena-allocated nodes.
//!
//! This module provides [`LinkedSequence`], the node-linked implementer of
//! [`Sequence`]. Nodes live in a `Vec` of slots and refer to their
//! neighbors by slot index; vacated slots are recycled through a free list.
//! No `unsafe` code and no reference counting is involved.
//!
//! # Overview
//!
//! - O(1) append and prepend
//! - O(min(i, n - i)) positional access, walking from the nearer end
//! - Forward and backward scans along the links
//! - Single-pass `remove_if` that unlinks matches in place
//!
//! # Examples
//!
//! ```rust
//! use seqlist::container::LinkedSequence;
//! use seqlist::sequence::Sequence;
//!
//! let mut sequence: LinkedSequence<i32> = (1..=5).collect();
//! assert!(sequence.remove_if(|value: &i32| value % 2 == 0));
//! assert_eq!(sequence.to_string(), "[1, 3, 5]");
//!
//! sequence.push_front(0);
//! assert_eq!(sequence.first(), Some(&0));
//! assert_eq!(sequence.index_of(&5), Some(3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::condition::Condition;
use crate::error::InsertError;
use crate::sequence::Sequence;

/// A node: the element and the slots of its neighbors.
#[derive(Clone)]
struct Node<T> {
    element: T,
    previous: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked ordered sequence.
///
/// # Time Complexity
///
/// | Operation          | Complexity        |
/// |--------------------|-------------------|
/// | `new`              | O(1)              |
/// | `add`/`push_back`  | O(1) amortized    |
/// | `push_front`       | O(1) amortized    |
/// | `pop_front`        | O(1)              |
/// | `pop_back`         | O(1)              |
/// | `get`              | O(min(i, n - i))  |
/// | `add_at`           | O(min(i, n - i))  |
/// | `remove_at`        | O(min(i, n - i))  |
/// | `remove_if`        | O(n)              |
/// | `sort_by`          | O(n log n)        |
/// | `sorted_search_by` | O(n)              |
///
/// # Examples
///
/// ```rust
/// use seqlist::container::LinkedSequence;
/// use seqlist::sequence::Sequence;
///
/// let mut sequence = LinkedSequence::new();
/// sequence.add(2);
/// sequence.add(3);
/// assert!(sequence.add_at(0, 1).is_ok());
/// assert_eq!(sequence.get(2), Some(&3));
/// ```
#[derive(Clone)]
pub struct LinkedSequence<T> {
    /// Node storage; `None` marks a vacant slot.
    slots: Vec<Option<Node<T>>>,
    /// Vacant slots available for reuse.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::container::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = LinkedSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` nodes.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if there are no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.node(self.head?).map(|node| &node.element)
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.node(self.tail?).map(|node| &node.element)
    }

    /// Appends an element at the back.
    pub fn push_back(&mut self, element: T) {
        let slot = self.allocate(Node {
            element,
            previous: self.tail,
            next: None,
        });
        match self.tail.and_then(|tail| self.node_mut(tail)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.length += 1;
    }

    /// Prepends an element at the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::container::LinkedSequence;
    ///
    /// let mut sequence: LinkedSequence<i32> = [2, 3].into_iter().collect();
    /// sequence.push_front(1);
    /// assert_eq!(sequence.to_string(), "[1, 2, 3]");
    /// ```
    pub fn push_front(&mut self, element: T) {
        match self.head {
            Some(head) => self.link_before(head, element),
            None => self.push_back(element),
        }
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// Releases vacant node slots and excess capacity.
    ///
    /// Removal leaves vacated slots on a free list for reuse; `remove_if`
    /// compacts on its own once vacant slots outnumber live ones. This
    /// compacts unconditionally and then shrinks the storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::container::LinkedSequence;
    ///
    /// let mut sequence: LinkedSequence<i32> = (0..1000).collect();
    /// while sequence.len() > 2 {
    ///     sequence.pop_back();
    /// }
    /// sequence.shrink_to_fit();
    /// assert_eq!(sequence.to_string(), "[0, 1]");
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.compact();
        self.slots.shrink_to_fit();
        self.free.shrink_to_fit();
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::container::LinkedSequence;
    ///
    /// let sequence: LinkedSequence<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = sequence.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    pub const fn iter(&self) -> LinkedSequenceIterator<'_, T> {
        LinkedSequenceIterator {
            sequence: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = Some(node);
            slot
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    /// Returns the slot holding position `index`, walking from the nearer end.
    fn locate(&self, index: usize) -> Option<usize> {
        if index >= self.length {
            return None;
        }
        if index <= self.length / 2 {
            let mut cursor = self.head?;
            for _ in 0..index {
                cursor = self.node(cursor)?.next?;
            }
            Some(cursor)
        } else {
            let mut cursor = self.tail?;
            for _ in index + 1..self.length {
                cursor = self.node(cursor)?.previous?;
            }
            Some(cursor)
        }
    }

    /// Links a new node immediately before the node in `at`.
    fn link_before(&mut self, at: usize, element: T) {
        let previous = self.node(at).and_then(|node| node.previous);
        let slot = self.allocate(Node {
            element,
            previous,
            next: Some(at),
        });
        if let Some(node) = self.node_mut(at) {
            node.previous = Some(slot);
        }
        match previous.and_then(|previous| self.node_mut(previous)) {
            Some(node) => node.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.length += 1;
    }

    /// Unlinks the node in `slot` and returns its element.
    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        match node.previous.and_then(|previous| self.node_mut(previous)) {
            Some(previous) => previous.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.node_mut(next)) {
            Some(next) => next.previous = node.previous,
            None => self.tail = node.previous,
        }
        self.length -= 1;
        Some(node.element)
    }

    /// Moves every element out, in order, leaving the sequence empty.
    fn drain_in_order(&mut self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.length);
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let Some(node) = self.slots.get_mut(slot).and_then(Option::take) else {
                break;
            };
            cursor = node.next;
            elements.push(node.element);
        }
        self.reset();
        elements
    }

    /// Relinks the live nodes into the first `length` slots, dropping every
    /// vacant one.
    fn compact(&mut self) {
        let elements = self.drain_in_order();
        self.extend(elements);
    }

    fn reset(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }
}

// =============================================================================
// Sequence Implementation
// =============================================================================

impl<T> Sequence for LinkedSequence<T> {
    type Element = T;
    type Iter<'a>
        = LinkedSequenceIterator<'a, T>
    where
        Self: 'a;

    #[inline]
    fn add(&mut self, element: T) {
        self.push_back(element);
    }

    fn add_at(&mut self, index: usize, element: T) -> Result<(), InsertError<T>> {
        if index > self.length {
            return Err(InsertError::new(index, self.length, element));
        }
        match self.locate(index) {
            Some(slot) => self.link_before(slot, element),
            None => self.push_back(element),
        }
        Ok(())
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.node(self.locate(index)?).map(|node| &node.element)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        let slot = self.locate(index)?;
        self.unlink(slot)
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
        let mut removed = false;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let Some(node) = self.node(slot) else {
                break;
            };
            // The successor is read before unlinking so no element is skipped.
            cursor = node.next;
            if condition.test(&node.element) {
                self.unlink(slot);
                removed = true;
            }
        }
        if self.free.len() > self.length {
            self.compact();
        }
        removed
    }

    fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.drain_in_order();
        elements.sort_by(comparator);
        self.extend(elements);
    }

    fn sorted_search_by<F>(&self, pattern: &T, mut comparator: F) -> Result<usize, usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for (index, element) in self.iter().enumerate() {
            match comparator(element, pattern) {
                Ordering::Less => {}
                Ordering::Equal => return Ok(index),
                Ordering::Greater => return Err(index),
            }
        }
        Err(self.length)
    }

    #[inline]
    fn clear(&mut self) {
        self.reset();
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`LinkedSequence`].
pub struct LinkedSequenceIterator<'a, T> {
    sequence: &'a LinkedSequence<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedSequenceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.sequence.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for LinkedSequenceIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.sequence.node(self.back?)?;
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for LinkedSequenceIterator<'_, T> {}

impl<T> FusedIterator for LinkedSequenceIterator<'_, T> {}

/// An owning iterator over elements of a [`LinkedSequence`].
pub struct LinkedSequenceIntoIterator<T> {
    sequence: LinkedSequence<T>,
}

impl<T> Iterator for LinkedSequenceIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.length, Some(self.sequence.length))
    }
}

impl<T> DoubleEndedIterator for LinkedSequenceIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.sequence.pop_back()
    }
}

impl<T> ExactSizeIterator for LinkedSequenceIntoIterator<T> {}

impl<T> FusedIterator for LinkedSequenceIntoIterator<T> {}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = LinkedSequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedSequenceIntoIterator { sequence: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = LinkedSequenceIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sequence = Self::with_capacity(iter.size_hint().0);
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

/// Hashes the length, then each element in order, so that equal sequences
/// hash equally regardless of how their slots are laid out.
impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.length))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LinkedSequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> LinkedSequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedSequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = LinkedSequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut sequence = LinkedSequence::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            sequence.push_back(element);
        }
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedSequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedSequenceVisitor::new())
    }
}

static_assertions::assert_impl_all!(LinkedSequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(LinkedSequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
