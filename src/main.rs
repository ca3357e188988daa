//! fp-gym demonstration entry point.
//!
//! Prints a fixed illustrative run of the pair finder and of both
//! missing/repeating strategies. Log verbosity follows `RUST_LOG`.

use fp_gym::arrays::Strategy;
use fp_gym::pairs::{PairFinder, find_first_pair};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_VALUES: [i64; 6] = [2, 7, 11, 15, 3, 6];
const SAMPLE_TARGET: i64 = 9;

const LARGE_SIZE: i64 = 10_000;
const LARGE_TARGET: i64 = 19_997;

const NEAR_PERMUTATION: [i64; 6] = [4, 3, 6, 2, 1, 1];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fp-gym demonstration");

    demonstrate_pairs();
    demonstrate_stack_safety();
    demonstrate_missing_repeating()?;

    println!("Demonstration completed.");
    Ok(())
}

fn demonstrate_pairs() {
    let finder = PairFinder::new();

    println!("Two Sum");
    println!("=======");
    println!("Input array: {SAMPLE_VALUES:?}");
    println!("Target sum:  {SAMPLE_TARGET}");
    println!();

    println!("First pair:");
    match find_first_pair(&SAMPLE_VALUES, SAMPLE_TARGET) {
        Some(pair) => {
            println!("  found at indices {:?}", pair.indices());
            println!("  values {:?}", pair.values());
        }
        None => println!("  no solution found"),
    }
    println!();

    println!("All pairs:");
    let all_pairs = finder.find_all_pairs(&SAMPLE_VALUES, SAMPLE_TARGET);
    if all_pairs.is_empty() {
        println!("  no pairs found");
    }
    for (number, pair) in all_pairs.iter().enumerate() {
        println!(
            "  pair {}: indices {:?}, values {:?}",
            number + 1,
            pair.indices(),
            pair.values()
        );
    }
    println!();

    println!(
        "Total pairs found: {}",
        finder.count_pairs(&SAMPLE_VALUES, SAMPLE_TARGET)
    );
    println!();
}

fn demonstrate_stack_safety() {
    println!("Stack safety on a larger, lazily produced input:");
    println!("  array: 0..{LARGE_SIZE}");
    println!("  target: {LARGE_TARGET}");

    let mut limited = PairFinder::new().solve_with_limit(0..LARGE_SIZE, LARGE_TARGET, Some(1));
    match limited.next() {
        Some(pair) => {
            println!(
                "  found pair: indices {:?}, values {:?}",
                pair.indices(),
                pair.values()
            );
            if let Some(sum) = pair.checked_sum() {
                println!("  sum verification: {sum} == {LARGE_TARGET}");
            }
        }
        None => println!("  no solution found"),
    }
    println!();
}

fn demonstrate_missing_repeating() -> Result<(), fp_gym::arrays::ArrayError> {
    println!("Missing and Repeating");
    println!("=====================");
    println!("Input array: {NEAR_PERMUTATION:?}");

    for strategy in Strategy::ALL {
        let mut values = NEAR_PERMUTATION;
        let answer = strategy.solve(&mut values)?;
        println!("  {strategy}: {answer}");
    }
    println!();
    Ok(())
}
