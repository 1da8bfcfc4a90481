//! Error types returned at the soft-failure boundaries of a sequence.
//!
//! Invalid read and remove positions are reported with `None`. An invalid
//! insert position is reported with [`InsertError`], which hands the rejected
//! element back to the caller so that nothing is lost.

use thiserror::Error;

/// Returned by `Sequence::add_at` when `index > size`.
///
/// The sequence is left unchanged and the element that could not be
/// inserted is returned inside the error.
///
/// # Examples
///
/// ```rust
/// use seqlist::error::InsertError;
///
/// let error = InsertError::new(5, 2, "late");
/// assert_eq!(
///     format!("{error}"),
///     "insert position 5 is out of bounds for a sequence of size 2"
/// );
/// assert_eq!(error.into_element(), "late");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("insert position {index} is out of bounds for a sequence of size {size}")]
pub struct InsertError<T> {
    /// The rejected position.
    pub index: usize,
    /// The size of the sequence at the time of the call.
    pub size: usize,
    /// The element that was not inserted.
    pub element: T,
}

impl<T> InsertError<T> {
    /// Creates a new error for the given position, size and element.
    #[inline]
    pub const fn new(index: usize, size: usize, element: T) -> Self {
        Self {
            index,
            size,
            element,
        }
    }

    /// Consumes the error and returns the rejected element.
    #[inline]
    pub fn into_element(self) -> T {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insert_error_display() {
        let error = InsertError::new(3, 1, 42);
        assert_eq!(
            format!("{error}"),
            "insert position 3 is out of bounds for a sequence of size 1"
        );
    }

    #[rstest]
    fn test_insert_error_returns_element() {
        let error = InsertError::new(9, 0, String::from("kept"));
        assert_eq!(error.into_element(), "kept");
    }

    #[rstest]
    fn test_insert_error_equality() {
        let error1 = InsertError::new(2, 1, 'a');
        let error2 = InsertError::new(2, 1, 'a');
        let error3 = InsertError::new(2, 1, 'b');
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[rstest]
    fn test_insert_error_source() {
        use std::error::Error;

        let error = InsertError::new(1, 0, 7_u8);
        assert!(error.source().is_none());
        let _: &dyn Error = &error;
    }
}
