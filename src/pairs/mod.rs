//! Two-sum pair enumeration.
//!
//! This module finds index pairs `(i, j)`, `i < j`, in a sequence of integers
//! whose values add up to a target:
//!
//! - [`enumerate_pairs`]: lazy iterator over every such pair
//! - [`find_first_pair`]: the first pair, as an `Option`
//! - [`find_all_pairs`] / [`count_pairs`]: eager collection and counting
//! - [`solve_with_limit`]: lazy enumeration capped at a result count
//! - [`PairFinder`]: the same operations as methods on a stateless solver
//!
//! All of them share one single-pass scan, O(n) time and O(n) auxiliary
//! space. Pairs are reported in the order they complete while scanning left
//! to right.
//!
//! # Examples
//!
//! ```rust
//! use fp_gym::pairs::{count_pairs, find_first_pair};
//!
//! let values = [2_i64, 7, 11, 15, 3, 6];
//!
//! match find_first_pair(&values, 9) {
//!     Some(pair) => assert_eq!(pair.values(), (2, 7)),
//!     None => unreachable!(),
//! }
//! assert_eq!(count_pairs(&values, 9), 2);
//! ```
//!
//! ## Stack Safety
//!
//! The scan is a loop driven by `Iterator::next`, so arbitrarily long (even
//! unbounded) inputs are fine as long as the consumer stops pulling:
//!
//! ```rust
//! use fp_gym::pairs::find_first_pair;
//!
//! let first = find_first_pair(0_i64.., 2_000_001).unwrap();
//! assert_eq!(first.indices(), (1_000_000, 1_000_001));
//! ```

mod enumerate;
mod result;
mod solver;

pub use enumerate::{
    LimitedPairs, Pairs, count_pairs, enumerate_pairs, find_all_pairs, find_first_pair,
    solve_with_limit,
};
pub use result::PairResult;
pub use solver::PairFinder;
