//! Error types for malformed missing/repeating input.

/// Describes why a slice is not a permutation of `[1, n]` with exactly one
/// value duplicated and one value missing.
///
/// # Examples
///
/// ```rust
/// use fp_gym::arrays::{ArrayError, find_missing_and_repeating};
///
/// let error = find_missing_and_repeating(&[1, 2, 3]).unwrap_err();
/// assert_eq!(error, ArrayError::NoDuplicate);
/// assert_eq!(error.to_string(), "every value occurs exactly once; nothing is missing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// The input slice has no elements.
    #[error("input is empty")]
    Empty,

    /// A value lies outside `[1, len]`.
    #[error("value {value} at index {index} is outside the range [1, {len}]")]
    OutOfRange {
        /// Position of the offending element.
        index: usize,
        /// The offending value.
        value: i64,
        /// Length of the input, i.e. the upper bound of the valid range.
        len: usize,
    },

    /// Every value occurs exactly once.
    #[error("every value occurs exactly once; nothing is missing")]
    NoDuplicate,

    /// More than one surplus occurrence was found, so more than one value
    /// is missing.
    #[error("more than one repeated occurrence: {first} and {second}")]
    MultipleDuplicates {
        /// The value of the first repeated occurrence.
        first: i64,
        /// The value of the second repeated occurrence.
        second: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ArrayError::Empty, "input is empty")]
    #[case(
        ArrayError::OutOfRange { index: 2, value: 7, len: 3 },
        "value 7 at index 2 is outside the range [1, 3]"
    )]
    #[case(
        ArrayError::MultipleDuplicates { first: 1, second: 4 },
        "more than one repeated occurrence: 1 and 4"
    )]
    fn test_error_display(#[case] error: ArrayError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
