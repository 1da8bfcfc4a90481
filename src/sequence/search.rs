//! Sorted search helpers.
//!
//! [`Sequence::sorted_search_by`] reports its outcome as
//! `Result<usize, usize>`, the convention of `slice::binary_search`. Some
//! callers need the older single-integer convention in which a miss is
//! encoded as `-(insertion_point) - 1`; [`encode_search_result`] and
//! [`decode_search_result`] convert between the two.

use std::cmp::Ordering;

use super::Sequence;

/// Binary searches any sequence through positional access.
///
/// This is a ready-made `sorted_search_by` for containers without
/// contiguous storage. It performs O(log n) calls to [`Sequence::get`].
/// `comparator` is called as `comparator(element, pattern)`.
///
/// # Errors
///
/// Returns `Err(insertion_point)` when no element compares equal to
/// `pattern`.
///
/// # Examples
///
/// ```rust
/// use seqlist::sequence::binary_search_by_index;
///
/// let sorted = vec![10, 20, 30];
/// assert_eq!(binary_search_by_index(&sorted, &20, Ord::cmp), Ok(1));
/// assert_eq!(binary_search_by_index(&sorted, &25, Ord::cmp), Err(2));
/// ```
pub fn binary_search_by_index<S, F>(
    sequence: &S,
    pattern: &S::Element,
    mut comparator: F,
) -> Result<usize, usize>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Element, &S::Element) -> Ordering,
{
    let mut low = 0;
    let mut high = sequence.size();
    while low < high {
        let middle = low + (high - low) / 2;
        let Some(element) = sequence.get(middle) else {
            break;
        };
        match comparator(element, pattern) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Ok(middle),
        }
    }
    Err(low)
}

/// Encodes a search result as a single integer.
///
/// `Ok(index)` becomes `index`; `Err(insertion_point)` becomes
/// `-(insertion_point) - 1`, which is always negative.
///
/// # Examples
///
/// ```rust
/// use seqlist::sequence::encode_search_result;
///
/// assert_eq!(encode_search_result(Ok(1)), 1);
/// assert_eq!(encode_search_result(Err(0)), -1);
/// assert_eq!(encode_search_result(Err(3)), -4);
/// ```
pub fn encode_search_result(result: Result<usize, usize>) -> isize {
    match result {
        Ok(index) => isize::try_from(index).unwrap_or(isize::MAX),
        Err(insertion_point) => isize::try_from(insertion_point).map_or(isize::MIN, |point| -point - 1),
    }
}

/// Decodes an integer produced by [`encode_search_result`].
///
/// # Errors
///
/// Returns `Err(insertion_point)` for negative input.
///
/// # Examples
///
/// ```rust
/// use seqlist::sequence::decode_search_result;
///
/// assert_eq!(decode_search_result(2), Ok(2));
/// assert_eq!(decode_search_result(-4), Err(3));
/// ```
pub fn decode_search_result(encoded: isize) -> Result<usize, usize> {
    usize::try_from(encoded).map_or_else(|_| Err(encoded.unsigned_abs() - 1), Ok)
}
