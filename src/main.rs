// model = "claude-opus-4-5"
// created = "2026-08-06"
// modified = "2026-08-07"
// driver = "Isaac Clayton"

//! Console timing harness: each algorithm against its baseline.
//!
//! Quick averaged wall-clock numbers for development iteration; the
//! criterion benches in benches/ are the statistically careful versions of
//! the same comparisons.

use std::time::Duration;
use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use yardstick::distance::distance_str;
use yardstick::sort::sample_sort;

const SORT_SIZE: usize = 1_000_000;
const SORT_RUNS: u32 = 10;
const DISTANCE_RUNS: u32 = 1000;

fn time_distance_pairs(pairs: &[(&str, &str)]) {
    for &(a, b) in pairs {
        let start = Instant::now();
        for _ in 0..DISTANCE_RUNS {
            let _ = distance_str(a, b);
        }
        let avg = start.elapsed() / DISTANCE_RUNS;
        println!("  {:?} -> {:?}: {} edits, avg {:?}", a, b, distance_str(a, b), avg);
    }
}

fn time_sort_case(label: &str, values: &[i64], p: usize) {
    let start = Instant::now();
    for _ in 0..SORT_RUNS {
        let mut copy = values.to_vec();
        copy.sort();
        let _ = copy.len();
    }
    let std_avg = start.elapsed() / SORT_RUNS;

    let mut rng = StdRng::seed_from_u64(42);
    let start = Instant::now();
    for _ in 0..SORT_RUNS {
        let sorted = sample_sort(values, p, &mut rng).expect("valid parameters");
        let _ = sorted.len();
    }
    let sample_avg = start.elapsed() / SORT_RUNS;

    println!("  {}", label);
    println!("    std sort:    {:?}", std_avg);
    println!("    sample sort: {:?}", sample_avg);
    println!("    ratio:       {:.2}x", ratio(sample_avg, std_avg));
}

fn ratio(a: Duration, b: Duration) -> f64 {
    return a.as_secs_f64() / b.as_secs_f64();
}

fn main() {
    println!("=== Wagner-Fischer edit distance ===");
    println!("close word pairs:");
    time_distance_pairs(&[
        ("ham", "sam"),
        ("Monday", "Tuesday"),
        ("North Dakota", "South Dakota"),
    ]);
    println!("distinct word pairs:");
    time_distance_pairs(&[
        ("abc", "efg"),
        ("a", "aaaaaaaaa"),
        ("123", "octopus"),
    ]);

    println!();
    println!("=== Sample sort vs std sort, {} elements ===", SORT_SIZE);
    let mut rng = StdRng::seed_from_u64(7);
    let narrow: Vec<i64> = (0..SORT_SIZE).map(|_| rng.gen_range(-20..=20)).collect();
    let wide: Vec<i64> = (0..SORT_SIZE).map(|_| rng.gen_range(-1000..=1000)).collect();

    time_sort_case("narrow value range, p = 3", &narrow, 3);
    time_sort_case("narrow value range, p = 30", &narrow, 30);
    time_sort_case("wide value range, p = 3", &wide, 3);
    time_sort_case("wide value range, p = 30", &wide, 30);
}
