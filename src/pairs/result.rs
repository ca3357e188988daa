//! The value object produced by pair enumeration.
//!
//! A [`PairResult`] records two positions of the input sequence together with
//! the values found there. Indices are always stored in ascending order and
//! the values follow the same order, so `values().0` is the element at
//! `indices().0`.

use std::fmt;

/// An ordered index pair whose values sum to the requested target.
///
/// Equality is structural: two results are equal iff both their index pairs
/// and their value pairs match elementwise.
///
/// # Examples
///
/// ```rust
/// use fp_gym::pairs::PairResult;
///
/// let result = PairResult::new((0, 1), (2, 7));
/// assert_eq!(result.indices(), (0, 1));
/// assert_eq!(result.values(), (2, 7));
/// assert_eq!(result.checked_sum(), Some(9));
/// assert_eq!(result.to_string(), "PairResult(indices=(0, 1), values=(2, 7))");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairResult {
    indices: (usize, usize),
    values: (i64, i64),
}

impl PairResult {
    /// Creates a result from an index pair and the values at those indices.
    ///
    /// The caller is responsible for keeping `values` in the same order as
    /// `indices`. Results produced by [`enumerate_pairs`](super::enumerate_pairs)
    /// always satisfy `indices.0 < indices.1`.
    #[inline]
    pub const fn new(indices: (usize, usize), values: (i64, i64)) -> Self {
        Self { indices, values }
    }

    /// Returns the index pair `(i, j)`.
    #[inline]
    pub const fn indices(&self) -> (usize, usize) {
        self.indices
    }

    /// Returns the value pair `(value[i], value[j])`.
    #[inline]
    pub const fn values(&self) -> (i64, i64) {
        self.values
    }

    /// Returns the lower index, i.e. the position of the complement.
    #[inline]
    pub const fn first_index(&self) -> usize {
        self.indices.0
    }

    /// Returns the higher index, i.e. the position at which the pair completed.
    #[inline]
    pub const fn second_index(&self) -> usize {
        self.indices.1
    }

    /// Returns the sum of both values, or `None` if it does not fit in `i64`.
    ///
    /// For results yielded by the enumeration this is always
    /// `Some(target)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_gym::pairs::PairResult;
    ///
    /// assert_eq!(PairResult::new((0, 1), (-4, 10)).checked_sum(), Some(6));
    /// assert_eq!(PairResult::new((0, 1), (i64::MAX, 1)).checked_sum(), None);
    /// ```
    #[inline]
    pub const fn checked_sum(&self) -> Option<i64> {
        self.values.0.checked_add(self.values.1)
    }
}

impl fmt::Display for PairResult {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "PairResult(indices=({}, {}), values=({}, {}))",
            self.indices.0, self.indices.1, self.values.0, self.values.1
        )
    }
}

static_assertions::assert_impl_all!(PairResult: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_accessors_return_constructor_arguments() {
        let result = PairResult::new((3, 8), (-5, 12));
        assert_eq!(result.indices(), (3, 8));
        assert_eq!(result.values(), (-5, 12));
        assert_eq!(result.first_index(), 3);
        assert_eq!(result.second_index(), 8);
    }

    #[rstest]
    #[case(PairResult::new((0, 1), (2, 7)), PairResult::new((0, 1), (2, 7)), true)]
    #[case(PairResult::new((0, 1), (2, 7)), PairResult::new((0, 2), (2, 7)), false)]
    #[case(PairResult::new((0, 1), (2, 7)), PairResult::new((0, 1), (7, 2)), false)]
    fn test_equality_is_structural(
        #[case] left: PairResult,
        #[case] right: PairResult,
        #[case] expected: bool,
    ) {
        assert_eq!(left == right, expected);
    }

    #[rstest]
    #[case((1, 2), Some(3))]
    #[case((i64::MIN, -1), None)]
    #[case((i64::MAX, i64::MIN), Some(-1))]
    fn test_checked_sum(#[case] values: (i64, i64), #[case] expected: Option<i64>) {
        assert_eq!(PairResult::new((0, 1), values).checked_sum(), expected);
    }

    #[rstest]
    fn test_display_mentions_indices_and_values() {
        let rendered = PairResult::new((0, 1), (2, 7)).to_string();
        assert!(rendered.starts_with("PairResult"));
        assert!(rendered.contains("(0, 1)"));
        assert!(rendered.contains("(2, 7)"));
    }
}
