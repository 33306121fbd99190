use crate::{Seq, Seq2};

/// Folds every element into an accumulator, starting from `init`.
///
/// ```rust
/// use seqtools::{reduce, source_iter};
///
/// assert_eq!(10, reduce(source_iter(1..=4), |acc, x| acc + x, 0));
/// ```
pub fn reduce<S, Func, Acc>(seq: S, mut func: Func, init: Acc) -> Acc
where
    S: Seq,
    Func: FnMut(Acc, S::Item) -> Acc,
{
    let mut acc = Some(init);
    seq.drive(|item| {
        acc = acc.take().map(|acc| (func)(acc, item));
        true
    });
    // Only `None` while `func` runs.
    acc.unwrap_or_else(|| unreachable!())
}

/// Keyed [`reduce`].
pub fn reduce2<S, K, V, Func, Acc>(seq2: S, mut func: Func, init: Acc) -> Acc
where
    S: Seq2<K, V>,
    Func: FnMut(Acc, K, V) -> Acc,
{
    reduce(seq2, |acc, (k, v)| (func)(acc, k, v), init)
}
