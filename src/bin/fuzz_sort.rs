//! AFL fuzz harness for sample sort.
//!
//! Decodes the fuzz input into a splitter count and a list of values, runs
//! sample sort with a fixed-seed generator, and checks the result against
//! the standard library sort. Invalid parameters must surface as errors,
//! never as panics or partial output.

use afl::fuzz;
use rand::SeedableRng;
use rand::rngs::StdRng;

use yardstick::sort::sample_sort;

fn main() {
    fuzz!(|data: &[u8]| {
        if data.len() < 2 {
            return;
        }
        let p = data[0] as usize;
        let values: Vec<i8> = data[1..].iter().map(|&b| b as i8).collect();

        // fixed seed: all nondeterminism comes from the fuzz input
        let mut rng = StdRng::seed_from_u64(42);
        match sample_sort(&values, p, &mut rng) {
            Ok(sorted) => {
                let mut expected = values.clone();
                expected.sort();
                assert_eq!(sorted, expected);
            }
            Err(_) => {
                // errors are reserved for parameter validation
                assert!(p < 2 || values.len() < 2 || p > values.len() - 1);
            }
        }
    });
}
