//! # fp-gym
//!
//! Small algorithm exercises written in a functional, iterator-first style.
//!
//! ## Overview
//!
//! - **Pairs**: two-sum enumeration. A lazy, single-pass [`Iterator`] over
//!   every index pair whose values add up to a target, plus eager helpers
//!   built on top of it ([`pairs`]).
//! - **Arrays**: recovering the missing and the repeated value of a
//!   near-permutation of `[1, n]`, by set difference or in place by
//!   sign-marking ([`arrays`]).
//!
//! "Not found" is always an `Option::None`; malformed input is a typed
//! error, never a panic.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the result types
//! - `fxhash`: use `rustc-hash` for the seen-value map of the pair scan
//! - `ahash`: use `ahash` for the seen-value map of the pair scan
//! - `full`: enable all optional integrations
//!
//! ## Example
//!
//! ```rust
//! use fp_gym::prelude::*;
//!
//! let pair = find_first_pair(&[2_i64, 7, 11, 15], 9).unwrap();
//! assert_eq!(pair.indices(), (0, 1));
//!
//! let answer = find_missing_and_repeating(&[3, 1, 3]).unwrap();
//! assert_eq!((answer.missing(), answer.duplicate()), (2, 3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fp_gym::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arrays::*;
    pub use crate::pairs::*;
}

pub mod arrays;
pub mod pairs;
