use crate::{Seq, Seq2};

/// Returns the last element. Drives `seq` to exhaustion.
pub fn last<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
{
    last_by(seq, |_| true)
}

/// Returns the last element matching `func`.
pub fn last_by<S, Func>(seq: S, mut func: Func) -> Option<S::Item>
where
    S: Seq,
    Func: FnMut(&S::Item) -> bool,
{
    let mut found = None;
    seq.drive(|item| {
        if (func)(&item) {
            found = Some(item);
        }
        true
    });
    found
}

/// Keyed [`last`].
pub fn last2<S, K, V>(seq2: S) -> Option<(K, V)>
where
    S: Seq2<K, V>,
{
    last(seq2)
}

/// Keyed [`last_by`].
pub fn last_by2<S, K, V, Func>(seq2: S, mut func: Func) -> Option<(K, V)>
where
    S: Seq2<K, V>,
    Func: FnMut(&K, &V) -> bool,
{
    last_by(seq2, |(k, v)| (func)(k, v))
}
