//! Lockstep lexicographic comparison of two sequences.
use core::cmp::Ordering;
use std::thread;

use crate::{Pull, Seq, Seq2};

/// Lexicographically compares `seq1` and `seq2`, like [`Ord`] for slices.
///
/// Elements are compared round by round until one differs. If one sequence runs out first, the
/// shorter one sorts first.
///
/// ```rust
/// use core::cmp::Ordering;
///
/// use seqtools::{compare, source_iter};
///
/// assert_eq!(Ordering::Less, compare(source_iter([1]), source_iter([1, 2])));
/// assert_eq!(Ordering::Greater, compare(source_iter([2]), source_iter([1])));
/// assert_eq!(Ordering::Equal, compare(source_iter([1, 2]), source_iter([1, 2])));
/// ```
pub fn compare<S1, S2>(seq1: S1, seq2: S2) -> Ordering
where
    S1: Seq + Send,
    S2: Seq<Item = S1::Item> + Send,
    S1::Item: Ord + Send,
{
    compare_by(seq1, seq2, Ord::cmp)
}

/// Like [`compare`], but elements are compared with `func`.
///
/// `func` should be a consistent three-way comparison; the result is unspecified otherwise.
pub fn compare_by<S1, S2, Func>(seq1: S1, seq2: S2, mut func: Func) -> Ordering
where
    S1: Seq + Send,
    S2: Seq + Send,
    S1::Item: Send,
    S2::Item: Send,
    Func: FnMut(&S1::Item, &S2::Item) -> Ordering,
{
    thread::scope(|scope| {
        let mut pull1 = Pull::scoped(scope, seq1);
        let mut pull2 = Pull::scoped(scope, seq2);
        loop {
            match (pull1.next(), pull2.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match (func)(&a, &b) {
                    Ordering::Equal => {}
                    ord => return ord,
                },
            }
        }
    })
}

/// Keyed [`compare`]: pairs are ordered by key, then by value.
pub fn compare2<S1, S2, K, V>(seq1: S1, seq2: S2) -> Ordering
where
    S1: Seq2<K, V> + Send,
    S2: Seq2<K, V> + Send,
    K: Ord + Send,
    V: Ord + Send,
{
    compare(seq1, seq2)
}

/// Keyed [`compare_by`], `func` receives `(key1, value1, key2, value2)`.
pub fn compare_by2<S1, S2, K1, V1, K2, V2, Func>(seq1: S1, seq2: S2, mut func: Func) -> Ordering
where
    S1: Seq2<K1, V1> + Send,
    S2: Seq2<K2, V2> + Send,
    K1: Send,
    V1: Send,
    K2: Send,
    V2: Send,
    Func: FnMut(&K1, &V1, &K2, &V2) -> Ordering,
{
    compare_by(seq1, seq2, |(k1, v1), (k2, v2)| (func)(k1, v1, k2, v2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_iter;

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(Ordering::Less, compare(source_iter([1]), source_iter([1, 2])));
        assert_eq!(Ordering::Greater, compare(source_iter([1, 2]), source_iter([1])));
        assert_eq!(
            Ordering::Less,
            compare(source_iter(Vec::<i32>::new()), source_iter([0]))
        );
    }

    #[test]
    fn first_difference_decides() {
        assert_eq!(Ordering::Greater, compare(source_iter([2]), source_iter([1])));
        assert_eq!(Ordering::Less, compare(source_iter([1, 2, 9]), source_iter([1, 3])));
        assert_eq!(Ordering::Equal, compare(source_iter([1, 2]), source_iter([1, 2])));
    }

    #[test]
    fn antisymmetric() {
        let cases: [(&[i32], &[i32]); 5] = [
            (&[], &[]),
            (&[1], &[1, 2]),
            (&[3, 1], &[2, 9, 9]),
            (&[4, 4], &[4, 4]),
            (&[0], &[]),
        ];
        for (a, b) in cases {
            assert_eq!(
                compare(source_iter(a), source_iter(b)),
                compare(source_iter(b), source_iter(a)).reverse(),
                "{a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn compare_by_across_types() {
        let ord = compare_by(source_iter([1, 2, 3]), source_iter(["1", "2", "30"]), |n, s| {
            n.cmp(&s.parse::<i32>().unwrap())
        });
        assert_eq!(Ordering::Less, ord);
    }

    #[test]
    fn compare2_orders_by_key_then_value() {
        assert_eq!(
            Ordering::Less,
            compare2(source_iter([(1, 'b')]), source_iter([(2, 'a')]))
        );
        assert_eq!(
            Ordering::Greater,
            compare2(source_iter([(1, 'b')]), source_iter([(1, 'a')]))
        );
    }

    #[test]
    fn compare_by2_on_values_only() {
        let ord = compare_by2(
            source_iter([("x", 1), ("y", 2)]),
            source_iter([("a", 1), ("b", 2)]),
            |_, v1, _, v2| v1.cmp(v2),
        );
        assert_eq!(Ordering::Equal, ord);
    }
}
