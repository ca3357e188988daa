//! Array exercises.
//!
//! - [`find_missing_and_repeating`]: set-difference strategy
//! - [`find_missing_and_repeating_in_place`]: sign-marking strategy that
//!   restores its input before returning
//! - [`Strategy`]: runtime selection between the two
//!
//! # Examples
//!
//! ```rust
//! use fp_gym::arrays::{find_missing_and_repeating, find_missing_and_repeating_in_place};
//!
//! let mut values = vec![4, 3, 6, 2, 1, 1];
//!
//! let by_set = find_missing_and_repeating(&values).unwrap();
//! let by_sign = find_missing_and_repeating_in_place(&mut values).unwrap();
//!
//! assert_eq!(by_set, by_sign);
//! assert_eq!((by_set.missing(), by_set.duplicate()), (5, 1));
//! ```

mod error;
mod missing_repeating;

pub use error::ArrayError;
pub use missing_repeating::{
    MissingRepeating, Strategy, find_missing_and_repeating, find_missing_and_repeating_in_place,
};
