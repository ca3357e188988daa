//! An object-style front end over the pair enumeration functions.

use std::borrow::Borrow;

use super::enumerate::{self, LimitedPairs, Pairs};
use super::result::PairResult;

/// Stateless solver bundling every pair-finding operation behind one value.
///
/// Each method delegates to the free function of the same name in
/// [`crate::pairs`]; the solver holds no state between calls and can be
/// shared freely.
///
/// # Examples
///
/// ```rust
/// use fp_gym::pairs::PairFinder;
///
/// let finder = PairFinder::new();
/// let values = [2_i64, 7, 11, 15, 3, 6];
///
/// assert_eq!(finder.count_pairs(&values, 9), 2);
/// assert_eq!(finder.find_first_pair(&values, 9).map(|pair| pair.indices()), Some((0, 1)));
///
/// let limited: Vec<_> = finder.solve_with_limit(&values, 9, Some(1)).collect();
/// assert_eq!(limited, finder.find_all_pairs(&values, 9)[..1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairFinder;

impl PairFinder {
    /// Creates a new solver.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// See [`enumerate::enumerate_pairs`].
    #[inline]
    pub fn enumerate_pairs<I>(&self, values: I, target: i64) -> Pairs<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Borrow<i64>,
    {
        enumerate::enumerate_pairs(values, target)
    }

    /// See [`enumerate::find_all_pairs`].
    #[inline]
    pub fn find_all_pairs<I>(&self, values: I, target: i64) -> Vec<PairResult>
    where
        I: IntoIterator,
        I::Item: Borrow<i64>,
    {
        enumerate::find_all_pairs(values, target)
    }

    /// See [`enumerate::find_first_pair`].
    #[inline]
    pub fn find_first_pair<I>(&self, values: I, target: i64) -> Option<PairResult>
    where
        I: IntoIterator,
        I::Item: Borrow<i64>,
    {
        enumerate::find_first_pair(values, target)
    }

    /// See [`enumerate::count_pairs`].
    #[inline]
    pub fn count_pairs<I>(&self, values: I, target: i64) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<i64>,
    {
        enumerate::count_pairs(values, target)
    }

    /// See [`enumerate::solve_with_limit`].
    #[inline]
    pub fn solve_with_limit<I>(
        &self,
        values: I,
        target: i64,
        max_results: Option<usize>,
    ) -> LimitedPairs<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Borrow<i64>,
    {
        enumerate::solve_with_limit(values, target, max_results)
    }
}
