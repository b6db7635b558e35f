// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-07"
// driver = "Isaac Clayton"

//! Splitter keys and bucket routing for sample sort.
//!
//! A splitter set is the sorted sequence of sampled keys that bounds the
//! buckets, fenced below by a negative-infinity sentinel and above by a
//! positive-infinity sentinel. The sentinels guarantee that every element
//! falls between some adjacent pair of keys, so the routing search always
//! resolves to a bucket.

use std::cmp::Ordering;

use rand::Rng;
use smallvec::SmallVec;

/// A bucket boundary: a sampled key, or one of the two sentinels.
///
/// The derived `Ord` compares variants in declaration order, which places
/// `NegInf` below every key and `PosInf` above every key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Splitter<T> {
    /// Below every possible key.
    NegInf,
    /// A key sampled from the input.
    Key(T),
    /// Above every possible key.
    PosInf,
}

impl<T: Ord> Splitter<T> {
    /// Compare this boundary against an element value.
    fn cmp_value(&self, x: &T) -> Ordering {
        return match self {
            Splitter::NegInf => Ordering::Less,
            Splitter::Key(key) => key.cmp(x),
            Splitter::PosInf => Ordering::Greater,
        };
    }
}

/// An ordered set of bucket boundaries: `NegInf`, p sorted sample keys,
/// `PosInf` - p + 2 keys bounding p + 1 buckets.
///
/// Duplicate samples are allowed. A repeated key bounds an empty bucket,
/// which sorts and concatenates like any other.
#[derive(Clone, Debug)]
pub struct SplitterSet<T> {
    /// Boundary keys in ascending order, sentinels included.
    keys: SmallVec<[Splitter<T>; 8]>,
}

impl<T: Ord + Clone> SplitterSet<T> {
    /// Sample p keys from the input uniformly at random, with replacement,
    /// and fence the sorted samples between the sentinels.
    ///
    /// The caller must pass a non-empty input.
    pub fn sample<R: Rng>(input: &[T], p: usize, rng: &mut R) -> SplitterSet<T> {
        let mut samples: Vec<T> = (0..p)
            .map(|_| input[rng.gen_range(0..input.len())].clone())
            .collect();
        samples.sort();

        let mut keys = SmallVec::with_capacity(p + 2);
        keys.push(Splitter::NegInf);
        keys.extend(samples.into_iter().map(Splitter::Key));
        keys.push(Splitter::PosInf);
        return SplitterSet { keys };
    }

    /// Number of buckets the keys bound: one per adjacent key pair.
    pub fn bucket_count(&self) -> usize {
        return self.keys.len() - 1;
    }

    /// Find the bucket index for an element via binary search over the keys.
    ///
    /// An element strictly between two adjacent keys lands in the bucket
    /// between them. An element equal to a key lands in the bucket that key
    /// bounds from above, so ties route one bucket down rather than up.
    /// The sentinels make the search total; exhausting it means the key
    /// sequence itself is broken.
    pub fn bucket_index(&self, x: &T) -> usize {
        let mut bot = 0;
        let mut top = self.keys.len();
        while bot < top {
            let mid = (bot + top) / 2;
            if mid == 0 {
                // catch-all for values below every key
                return 0;
            }
            match self.keys[mid].cmp_value(x) {
                Ordering::Greater => {
                    if self.keys[mid - 1].cmp_value(x) == Ordering::Less {
                        return mid - 1;
                    }
                    top = mid;
                }
                Ordering::Less => bot = mid + 1,
                Ordering::Equal => return mid - 1,
            }
        }
        unreachable!("splitter keys are unsorted or missing a sentinel");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set_of(keys: &[i32]) -> SplitterSet<i32> {
        let mut all = SmallVec::new();
        all.push(Splitter::NegInf);
        all.extend(keys.iter().copied().map(Splitter::Key));
        all.push(Splitter::PosInf);
        return SplitterSet { keys: all };
    }

    #[test]
    fn sentinels_order_around_keys() {
        assert!(Splitter::NegInf < Splitter::Key(i32::MIN));
        assert!(Splitter::Key(i32::MAX) < Splitter::PosInf);
        assert!(Splitter::<i32>::NegInf < Splitter::PosInf);
    }

    #[test]
    fn value_below_all_splitters() {
        let set = set_of(&[10, 20, 30]);
        assert_eq!(set.bucket_index(&5), 0);
        assert_eq!(set.bucket_index(&i32::MIN), 0);
    }

    #[test]
    fn value_above_all_splitters() {
        let set = set_of(&[10, 20, 30]);
        assert_eq!(set.bucket_index(&99), 3);
        assert_eq!(set.bucket_index(&i32::MAX), 3);
    }

    #[test]
    fn value_equal_to_a_splitter() {
        let set = set_of(&[10, 20, 30]);
        // ties land in the bucket the key bounds from above
        assert_eq!(set.bucket_index(&10), 0);
        assert_eq!(set.bucket_index(&20), 1);
        assert_eq!(set.bucket_index(&30), 2);
    }

    #[test]
    fn value_strictly_between_splitters() {
        let set = set_of(&[10, 20, 30]);
        assert_eq!(set.bucket_index(&15), 1);
        assert_eq!(set.bucket_index(&25), 2);
    }

    #[test]
    fn duplicate_splitters_leave_an_empty_bucket() {
        let set = set_of(&[5, 5, 9]);
        assert_eq!(set.bucket_count(), 4);
        assert_eq!(set.bucket_index(&3), 0);
        assert_eq!(set.bucket_index(&5), 1);
        assert_eq!(set.bucket_index(&7), 2);
        assert_eq!(set.bucket_index(&11), 3);
    }

    #[test]
    fn every_value_routes_in_range() {
        let set = set_of(&[0, 10, 10, 20]);
        for v in -25..45 {
            assert!(set.bucket_index(&v) < set.bucket_count());
        }
    }

    #[test]
    fn routing_respects_bucket_order() {
        // routed bucket indices must be non-decreasing in the value
        let set = set_of(&[-3, 0, 0, 8, 12]);
        let mut last = 0;
        for v in -20..20 {
            let idx = set.bucket_index(&v);
            assert!(idx >= last);
            last = idx;
        }
    }

    #[test]
    fn sampled_set_has_one_more_bucket_than_splitters() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<i32> = (0..50).collect();
        let set = SplitterSet::sample(&input, 7, &mut rng);
        assert_eq!(set.bucket_count(), 8);
    }

    #[test]
    fn sampled_keys_are_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        let input = vec![9, 1, 8, 2, 7, 3, 6, 4, 5];
        let set = SplitterSet::sample(&input, 5, &mut rng);
        for pair in set.keys.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
