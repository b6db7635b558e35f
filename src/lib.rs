// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-07"
// driver = "Isaac Clayton"

//! Yardstick - classic algorithms timed against their baselines.
//!
//! Two independent, stateless components: Wagner-Fischer edit distance and
//! Frazer-McKellar sample sort. The binary and the criterion benches time
//! each one against a baseline (a naive recursive distance in the pedagogy
//! crate, the standard library sort).
//!
//! # Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use yardstick::distance::distance_str;
//! use yardstick::sort::sample_sort;
//!
//! assert_eq!(distance_str("kitten", "sitting"), 3);
//!
//! // Splitter sampling is driven by the generator you pass in, so a seeded
//! // generator makes the whole sort deterministic.
//! let mut rng = StdRng::seed_from_u64(42);
//! let sorted = sample_sort(&[5, 3, 8, 1, 9, 2], 3, &mut rng).unwrap();
//! assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
//! ```

pub mod distance;
pub mod sort;
