//! Lockstep equality over two sequences.
use std::thread;

use crate::{Pull, Seq, Seq2};

/// Reports whether `seq1` and `seq2` yield equal elements in the same order.
///
/// Both sequences are pulled one element per round. The first mismatch, or a round where only
/// one side still has an element, ends the comparison.
///
/// ```rust
/// use seqtools::{equal, source_iter};
///
/// assert!(equal(source_iter([1, 2, 3]), source_iter([1, 2, 3])));
/// assert!(!equal(source_iter([1, 2]), source_iter([1, 2, 3])));
/// ```
pub fn equal<S1, S2>(seq1: S1, seq2: S2) -> bool
where
    S1: Seq + Send,
    S2: Seq<Item = S1::Item> + Send,
    S1::Item: PartialEq + Send,
{
    equal_by(seq1, seq2, |a, b| a == b)
}

/// Like [`equal`], but elements are compared with `func`.
///
/// The two sequences may have different item types. A panic in `func` propagates to the caller,
/// after both producers have been released.
pub fn equal_by<S1, S2, Func>(seq1: S1, seq2: S2, mut func: Func) -> bool
where
    S1: Seq + Send,
    S2: Seq + Send,
    S1::Item: Send,
    S2::Item: Send,
    Func: FnMut(&S1::Item, &S2::Item) -> bool,
{
    thread::scope(|scope| {
        let mut pull1 = Pull::scoped(scope, seq1);
        let mut pull2 = Pull::scoped(scope, seq2);
        loop {
            match (pull1.next(), pull2.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if !(func)(&a, &b) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    })
}

/// Keyed [`equal`]: both the keys and the values must match pairwise.
pub fn equal2<S1, S2, K, V>(seq1: S1, seq2: S2) -> bool
where
    S1: Seq2<K, V> + Send,
    S2: Seq2<K, V> + Send,
    K: PartialEq + Send,
    V: PartialEq + Send,
{
    equal(seq1, seq2)
}

/// Keyed [`equal_by`], `func` receives `(key1, value1, key2, value2)`.
pub fn equal_by2<S1, S2, K1, V1, K2, V2, Func>(seq1: S1, seq2: S2, mut func: Func) -> bool
where
    S1: Seq2<K1, V1> + Send,
    S2: Seq2<K2, V2> + Send,
    K1: Send,
    V1: Send,
    K2: Send,
    V2: Send,
    Func: FnMut(&K1, &V1, &K2, &V2) -> bool,
{
    equal_by(seq1, seq2, |(k1, v1), (k2, v2)| (func)(k1, v1, k2, v2))
}
