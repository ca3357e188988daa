//! Recovering the missing and the repeated value of a near-permutation.
//!
//! The input is a slice of length `n` holding every integer of `[1, n]`
//! exactly once, except that one value occurs twice and another is absent.
//! Two strategies are provided:
//!
//! - [`find_missing_and_repeating`]: bitmap of seen values, O(n) space
//! - [`find_missing_and_repeating_in_place`]: sign-marking, O(1) space
//!
//! Both validate their input and return [`ArrayError`] instead of an
//! arbitrary answer when the slice is malformed.

use std::fmt;

use super::error::ArrayError;

// =============================================================================
// MissingRepeating
// =============================================================================

/// The `(missing, duplicate)` answer for a near-permutation of `[1, n]`.
///
/// # Examples
///
/// ```rust
/// use fp_gym::arrays::{MissingRepeating, find_missing_and_repeating};
///
/// let answer = find_missing_and_repeating(&[3, 1, 3]).unwrap();
/// assert_eq!(answer, MissingRepeating::new(2, 3));
/// assert_eq!(<(i64, i64)>::from(answer), (2, 3));
/// assert_eq!(answer.to_string(), "missing=2, duplicate=3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissingRepeating {
    missing: i64,
    duplicate: i64,
}

impl MissingRepeating {
    /// Creates an answer from its two components.
    #[inline]
    pub const fn new(missing: i64, duplicate: i64) -> Self {
        Self { missing, duplicate }
    }

    /// The value of `[1, n]` absent from the input.
    #[inline]
    pub const fn missing(&self) -> i64 {
        self.missing
    }

    /// The value occurring twice in the input.
    #[inline]
    pub const fn duplicate(&self) -> i64 {
        self.duplicate
    }
}

impl From<MissingRepeating> for (i64, i64) {
    #[inline]
    fn from(answer: MissingRepeating) -> Self {
        (answer.missing, answer.duplicate)
    }
}

impl fmt::Display for MissingRepeating {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "missing={}, duplicate={}",
            self.missing, self.duplicate
        )
    }
}

static_assertions::assert_impl_all!(MissingRepeating: Copy, Send, Sync);

// =============================================================================
// Strategy
// =============================================================================

/// Selects the algorithm used to solve a missing/repeating instance.
///
/// # Examples
///
/// ```rust
/// use fp_gym::arrays::Strategy;
///
/// for strategy in Strategy::ALL {
///     let mut values = vec![4, 3, 6, 2, 1, 1];
///     let answer = strategy.solve(&mut values).unwrap();
///     assert_eq!((answer.missing(), answer.duplicate()), (5, 1));
///     assert_eq!(values, vec![4, 3, 6, 2, 1, 1]);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Tracks seen values in a bitmap. O(n) auxiliary space.
    #[default]
    SetDifference,
    /// Marks seen values through the sign bit of the input. O(1) auxiliary
    /// space; the input is restored before returning.
    SignMarking,
}

impl Strategy {
    /// Every available strategy.
    pub const ALL: [Self; 2] = [Self::SetDifference, Self::SignMarking];

    /// Solves `values` with this strategy.
    ///
    /// The slice is only borrowed mutably for [`Strategy::SignMarking`];
    /// in both cases its contents are unchanged when this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError`] when `values` is not a near-permutation of
    /// `[1, n]`.
    pub fn solve(self, values: &mut [i64]) -> Result<MissingRepeating, ArrayError> {
        match self {
            Self::SetDifference => find_missing_and_repeating(values),
            Self::SignMarking => find_missing_and_repeating_in_place(values),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetDifference => formatter.write_str("set-difference"),
            Self::SignMarking => formatter.write_str("sign-marking"),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Maps a value in `[1, len]` to its 0-based slot.
fn slot_of(index: usize, value: i64, len: usize) -> Result<usize, ArrayError> {
    usize::try_from(value)
        .ok()
        .filter(|candidate| (1..=len).contains(candidate))
        .map(|candidate| candidate - 1)
        .ok_or(ArrayError::OutOfRange { index, value, len })
}

/// Maps a 0-based slot back to its value.
#[allow(clippy::cast_possible_wrap)]
const fn value_of(slot: usize) -> i64 {
    // Slice lengths never exceed isize::MAX.
    slot as i64 + 1
}

/// Checks that `values` is non-empty and lies within `[1, n]`, returning `n`.
fn check_range(values: &[i64]) -> Result<usize, ArrayError> {
    let len = values.len();
    if len == 0 {
        return Err(ArrayError::Empty);
    }
    for (index, &value) in values.iter().enumerate() {
        slot_of(index, value, len)?;
    }
    Ok(len)
}

fn reject(error: ArrayError) -> ArrayError {
    tracing::debug!(%error, "rejected malformed input");
    error
}

/// Records one surplus occurrence, failing on the second.
fn record_duplicate(duplicate: &mut Option<i64>, value: i64) -> Result<(), ArrayError> {
    match *duplicate {
        None => {
            *duplicate = Some(value);
            Ok(())
        }
        Some(first) => Err(ArrayError::MultipleDuplicates {
            first,
            second: value,
        }),
    }
}

// =============================================================================
// Set-difference strategy
// =============================================================================

/// Finds the missing and the repeated value using a bitmap of seen values.
///
/// The first value encountered a second time is the duplicate; the only
/// value of `[1, n]` never encountered is the missing one. O(n) time and
/// O(n) auxiliary space; `values` is not modified.
///
/// # Errors
///
/// Range is checked for the whole slice before duplicates are looked at.
///
/// - [`ArrayError::Empty`] if `values` is empty
/// - [`ArrayError::OutOfRange`] for the first value outside `[1, n]`
/// - [`ArrayError::NoDuplicate`] if `values` is already a permutation
/// - [`ArrayError::MultipleDuplicates`] if more than one value is missing
///
/// # Examples
///
/// ```rust
/// use fp_gym::arrays::find_missing_and_repeating;
///
/// let answer = find_missing_and_repeating(&[4, 3, 6, 2, 1, 1]).unwrap();
/// assert_eq!(answer.missing(), 5);
/// assert_eq!(answer.duplicate(), 1);
/// ```
#[tracing::instrument(level = "debug", skip(values), fields(len = values.len()))]
pub fn find_missing_and_repeating(values: &[i64]) -> Result<MissingRepeating, ArrayError> {
    let len = check_range(values).map_err(reject)?;

    let mut seen = vec![false; len];
    let mut duplicate = None;

    for (index, &value) in values.iter().enumerate() {
        let slot = slot_of(index, value, len).map_err(reject)?;
        if std::mem::replace(&mut seen[slot], true) {
            record_duplicate(&mut duplicate, value).map_err(reject)?;
        }
    }

    let duplicate = duplicate.ok_or(ArrayError::NoDuplicate).map_err(reject)?;
    // With exactly one surplus occurrence, exactly one slot stays unseen.
    let missing = seen
        .iter()
        .position(|&marked| !marked)
        .map(value_of)
        .ok_or(ArrayError::NoDuplicate)
        .map_err(reject)?;

    Ok(MissingRepeating::new(missing, duplicate))
}

// =============================================================================
// Sign-marking strategy
// =============================================================================

/// Scoped sign-marking over a slice of positive values.
///
/// Slots are marked by negation. Dropping the guard makes every slot
/// positive again, which restores the original contents on every exit path.
struct SignMarks<'a> {
    values: &'a mut [i64],
}

impl<'a> SignMarks<'a> {
    /// All values must already be known to be positive.
    fn new(values: &'a mut [i64]) -> Self {
        Self { values }
    }

    /// Original (unmarked) value at `index`.
    fn original(&self, index: usize) -> i64 {
        self.values[index].abs()
    }

    /// Marks `slot` as visited. Returns `false` if it already was.
    fn mark(&mut self, slot: usize) -> bool {
        let entry = &mut self.values[slot];
        if *entry < 0 {
            false
        } else {
            *entry = -*entry;
            true
        }
    }

    fn first_unmarked(&self) -> Option<usize> {
        self.values.iter().position(|&value| value > 0)
    }
}

impl Drop for SignMarks<'_> {
    fn drop(&mut self) {
        for value in self.values.iter_mut() {
            *value = value.abs();
        }
    }
}

/// Finds the missing and the repeated value with O(1) auxiliary space.
///
/// Each value `v` is used as an index: slot `v - 1` is negated to mark `v`
/// as seen. Reaching an already negative slot reveals the duplicate; the
/// slot left positive at the end reveals the missing value. Every sign is
/// flipped back before the function returns, including on error, so the
/// caller observes `values` unchanged.
///
/// # Errors
///
/// Same conditions, in the same order of precedence, as
/// [`find_missing_and_repeating`]. Range violations are detected before any
/// slot is marked.
///
/// # Examples
///
/// ```rust
/// use fp_gym::arrays::find_missing_and_repeating_in_place;
///
/// let mut values = vec![3, 1, 3];
/// let answer = find_missing_and_repeating_in_place(&mut values).unwrap();
/// assert_eq!((answer.missing(), answer.duplicate()), (2, 3));
/// assert_eq!(values, vec![3, 1, 3]);
/// ```
#[tracing::instrument(level = "debug", skip(values), fields(len = values.len()))]
pub fn find_missing_and_repeating_in_place(
    values: &mut [i64],
) -> Result<MissingRepeating, ArrayError> {
    // Marking relies on every value being positive.
    let len = check_range(values).map_err(reject)?;

    let mut marks = SignMarks::new(values);
    let mut duplicate = None;

    for index in 0..len {
        let value = marks.original(index);
        let slot = slot_of(index, value, len).map_err(reject)?;
        if !marks.mark(slot) {
            record_duplicate(&mut duplicate, value).map_err(reject)?;
        }
    }

    let duplicate = duplicate.ok_or(ArrayError::NoDuplicate).map_err(reject)?;
    let missing = marks
        .first_unmarked()
        .map(value_of)
        .ok_or(ArrayError::NoDuplicate)
        .map_err(reject)?;

    Ok(MissingRepeating::new(missing, duplicate))
}
