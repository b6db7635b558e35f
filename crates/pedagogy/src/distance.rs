// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Naive recursive edit distance.
//!
//! Direct recursion on the definition: either the first elements match and
//! cost nothing, or one of insert/delete/substitute is paid and the
//! remainders recurse. Exponential time - fine for the short benchmark
//! words, hopeless for anything longer. The dynamic-programming
//! implementation in the root crate is the one to call.

/// Compute the edit distance by brute-force recursion. Slow baseline only.
pub fn recursive<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    if a[0] == b[0] {
        return recursive(&a[1..], &b[1..]);
    }
    let delete = recursive(&a[1..], b);
    let insert = recursive(a, &b[1..]);
    let substitute = recursive(&a[1..], &b[1..]);
    return 1 + delete.min(insert).min(substitute);
}

/// String convenience wrapper, comparing char by char.
pub fn recursive_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    return recursive(&a, &b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_word_pairs() {
        assert_eq!(recursive_str("ham", "sam"), 1);
        assert_eq!(recursive_str("kitten", "sitting"), 3);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(recursive_str("", ""), 0);
        assert_eq!(recursive_str("", "abc"), 3);
        assert_eq!(recursive_str("abc", ""), 3);
    }

    #[test]
    fn identical_inputs() {
        assert_eq!(recursive_str("sorted", "sorted"), 0);
    }
}
