#![cfg(feature = "serde")]

//! Integration tests for serde support in fp-gym.
//!
//! These tests verify that the result types serialize and deserialize
//! with serde_json.

use fp_gym::arrays::{MissingRepeating, find_missing_and_repeating};
use fp_gym::pairs::{PairResult, find_all_pairs};
use rstest::rstest;

// =============================================================================
// PairResult
// =============================================================================

#[rstest]
fn test_pair_result_json_roundtrip() {
    let result = PairResult::new((0, 1), (2, 7));
    let json = serde_json::to_string(&result).unwrap();
    let restored: PairResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, restored);
}

#[rstest]
fn test_pair_result_json_shape() {
    let json = serde_json::to_value(PairResult::new((4, 5), (3, 6))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "indices": [4, 5], "values": [3, 6] })
    );
}

#[rstest]
fn test_enumerated_pairs_json_roundtrip() {
    let values: [i64; 6] = [2, 7, 11, 15, 3, 6];
    let results = find_all_pairs(&values, 9);
    let json = serde_json::to_string(&results).unwrap();
    let restored: Vec<PairResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(results, restored);
}

// =============================================================================
// MissingRepeating
// =============================================================================

#[rstest]
fn test_missing_repeating_json_shape() {
    let answer = find_missing_and_repeating(&[3, 1, 3]).unwrap();
    let json = serde_json::to_value(answer).unwrap();
    assert_eq!(json, serde_json::json!({ "missing": 2, "duplicate": 3 }));

    let restored: MissingRepeating = serde_json::from_value(json).unwrap();
    assert_eq!(restored, answer);
}
