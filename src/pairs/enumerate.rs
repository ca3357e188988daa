//! Lazy single-pass pair enumeration.
//!
//! [`Pairs`] is an explicit state machine over its input: the next position
//! to scan and a map from each value seen so far to the first index it
//! appeared at. Every call to `next` advances the scan only until the next
//! completed pair (or the end of input), so a consumer that stops early never
//! pays for the rest of the sequence.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::iter::{Fuse, FusedIterator, Take};

use super::result::PairResult;

// =============================================================================
// Seen-value map
// =============================================================================

#[cfg(feature = "fxhash")]
type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenHasher = std::hash::RandomState;

/// Value -> lowest index at which that value was observed.
type SeenIndex = HashMap<i64, usize, SeenHasher>;

// =============================================================================
// Pairs
// =============================================================================

/// A lazy iterator over every [`PairResult`] whose values sum to a target.
///
/// Created by [`enumerate_pairs`]. Results are ordered by their completion
/// index (`second_index`) ascending; for each completion index at most one
/// result is produced, paired with the earliest occurrence of the complement.
///
/// # Examples
///
/// ```rust
/// use fp_gym::pairs::enumerate_pairs;
///
/// let mut pairs = enumerate_pairs(&[2_i64, 7, 11, 15, 3, 6], 9);
///
/// let first = pairs.next().unwrap();
/// assert_eq!(first.indices(), (0, 1));
/// // Only the first two elements have been consumed so far.
/// assert_eq!(pairs.scanned(), 2);
///
/// let second = pairs.next().unwrap();
/// assert_eq!(second.indices(), (4, 5));
/// assert_eq!(pairs.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Pairs<I> {
    source: Fuse<I>,
    target: i64,
    position: usize,
    seen: SeenIndex,
}

impl<I: Iterator> Pairs<I> {
    fn new(source: I, target: i64) -> Self {
        Self {
            source: source.fuse(),
            target,
            position: 0,
            seen: SeenIndex::default(),
        }
    }
}

impl<I> Pairs<I> {
    /// Returns the target sum this iterator searches for.
    #[inline]
    pub const fn target(&self) -> i64 {
        self.target
    }

    /// Returns how many input elements have been consumed so far.
    #[inline]
    pub const fn scanned(&self) -> usize {
        self.position
    }
}

impl<I> Iterator for Pairs<I>
where
    I: Iterator,
    I::Item: Borrow<i64>,
{
    type Item = PairResult;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.source.by_ref() {
            let value = *item.borrow();
            let index = self.position;
            self.position += 1;

            // An overflowing complement has no i64 representation, so no
            // earlier element can complete the pair.
            let found = self.target.checked_sub(value).and_then(|complement| {
                self.seen
                    .get(&complement)
                    .map(|&first| PairResult::new((first, index), (complement, value)))
            });

            self.seen.entry(value).or_insert(index);

            if let Some(result) = found {
                tracing::trace!(
                    first = result.first_index(),
                    second = result.second_index(),
                    "pair completed"
                );
                return Some(result);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I> FusedIterator for Pairs<I>
where
    I: Iterator,
    I::Item: Borrow<i64>,
{
}

/// A [`Pairs`] iterator capped at a maximum number of results.
pub type LimitedPairs<I> = Take<Pairs<I>>;

// =============================================================================
// Entry points
// =============================================================================

/// Lazily enumerates every index pair `(i, j)`, `i < j`, with
/// `value[i] + value[j] == target`.
///
/// Accepts anything iterable over `i64` or `&i64`: slices, vectors, and lazy
/// ranges alike. No element is read until the returned iterator is polled.
///
/// # Examples
///
/// ```rust
/// use fp_gym::pairs::{PairResult, enumerate_pairs};
///
/// let results: Vec<_> = enumerate_pairs(vec![2_i64, 7, 11, 15], 9).collect();
/// assert_eq!(results, vec![PairResult::new((0, 1), (2, 7))]);
///
/// assert_eq!(enumerate_pairs(&[1_i64, 2, 3, 4], 10).next(), None);
/// ```
pub fn enumerate_pairs<I>(values: I, target: i64) -> Pairs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Borrow<i64>,
{
    Pairs::new(values.into_iter(), target)
}

/// Returns the first pair [`enumerate_pairs`] would yield, or `None`.
///
/// Scanning stops at the first completed pair.
///
/// # Examples
///
/// ```rust
/// use fp_gym::pairs::find_first_pair;
///
/// let first = find_first_pair(&[2_i64, 7, 11, 15], 9).unwrap();
/// assert_eq!(first.values(), (2, 7));
///
/// assert!(find_first_pair(&[] as &[i64], 5).is_none());
/// ```
#[tracing::instrument(level = "debug", skip(values))]
pub fn find_first_pair<I>(values: I, target: i64) -> Option<PairResult>
where
    I: IntoIterator,
    I::Item: Borrow<i64>,
{
    enumerate_pairs(values, target).next()
}

/// Counts every pair [`enumerate_pairs`] would yield without retaining them.
#[tracing::instrument(level = "debug", skip(values))]
pub fn count_pairs<I>(values: I, target: i64) -> usize
where
    I: IntoIterator,
    I::Item: Borrow<i64>,
{
    let count = enumerate_pairs(values, target).count();
    tracing::debug!(count, "pairs counted");
    count
}

/// Collects every pair [`enumerate_pairs`] would yield, in emission order.
#[tracing::instrument(level = "debug", skip(values))]
pub fn find_all_pairs<I>(values: I, target: i64) -> Vec<PairResult>
where
    I: IntoIterator,
    I::Item: Borrow<i64>,
{
    enumerate_pairs(values, target).collect()
}

/// Like [`enumerate_pairs`], but stops after `max_results` results.
///
/// `None` means no limit. The input is never read past the completion index
/// of the last permitted result; a limit of zero reads nothing.
///
/// # Examples
///
/// ```rust
/// use fp_gym::pairs::solve_with_limit;
///
/// let limited: Vec<_> = solve_with_limit(0..10_000_i64, 19_997, Some(1)).collect();
/// assert_eq!(limited.len(), 1);
/// assert_eq!(limited[0].indices(), (9_998, 9_999));
/// ```
pub fn solve_with_limit<I>(
    values: I,
    target: i64,
    max_results: Option<usize>,
) -> LimitedPairs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Borrow<i64>,
{
    enumerate_pairs(values, target).take(max_results.unwrap_or(usize::MAX))
}
