// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-07"
// driver = "Isaac Clayton"

//! Frazer-McKellar sample sort.
//!
//! Sorts by partitioning the input into buckets bounded by randomly sampled
//! splitter keys, sorting each bucket independently, and concatenating the
//! buckets in index order. With representative samples the expected bucket
//! size is n / (p + 1); a skewed sample (all-identical keys, lopsided value
//! distributions) degrades toward one large bucket whose comparison sort
//! then dominates the run. That degradation is a property of random
//! sampling, not a routing bug.
//!
//! The random generator is an explicit parameter rather than a global, so a
//! seeded generator reproduces an entire sort bit for bit.

mod splitter;

pub use splitter::Splitter;
pub use splitter::SplitterSet;

use rand::Rng;

/// Error returned when sample sort's parameters are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSortError {
    /// p was less than 2.
    TooFewSplitters { p: usize },
    /// p exceeded input.len() - 1.
    TooManySplitters { p: usize, len: usize },
    /// The input held fewer than two elements.
    InputTooSmall { len: usize },
}

/// Sort a sequence by routing it into p + 1 buckets around p sampled keys.
///
/// Fails with an explicit error when p < 2, the input holds fewer than two
/// elements, or p exceeds input.len() - 1. The caller inspects the result;
/// a partial or corrupt sort is never returned.
pub fn sample_sort<T, R>(input: &[T], p: usize, rng: &mut R) -> Result<Vec<T>, SampleSortError>
where
    T: Ord + Clone,
    R: Rng,
{
    if p < 2 {
        return Err(SampleSortError::TooFewSplitters { p });
    }
    // length check first: the p bound below subtracts from input.len()
    if input.len() < 2 {
        return Err(SampleSortError::InputTooSmall { len: input.len() });
    }
    if p > input.len() - 1 {
        return Err(SampleSortError::TooManySplitters { p, len: input.len() });
    }

    let splitters = SplitterSet::sample(input, p, rng);

    // one routing pass over the input
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); splitters.bucket_count()];
    for x in input {
        buckets[splitters.bucket_index(x)].push(x.clone());
    }

    // each bucket sorts independently of the others
    for bucket in &mut buckets {
        bucket.sort();
    }

    let mut result = Vec::with_capacity(input.len());
    for bucket in buckets {
        result.extend(bucket);
    }
    return Ok(result);
}
