use crate::{Seq, Seq2};

/// Returns the first element, without driving any further.
pub fn first<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
{
    first_by(seq, |_| true)
}

/// Returns the first element matching `func`.
pub fn first_by<S, Func>(seq: S, mut func: Func) -> Option<S::Item>
where
    S: Seq,
    Func: FnMut(&S::Item) -> bool,
{
    let mut found = None;
    seq.drive(|item| {
        if (func)(&item) {
            found = Some(item);
            return false;
        }
        true
    });
    found
}

/// Keyed [`first`].
pub fn first2<S, K, V>(seq2: S) -> Option<(K, V)>
where
    S: Seq2<K, V>,
{
    first(seq2)
}

/// Keyed [`first_by`].
pub fn first_by2<S, K, V, Func>(seq2: S, mut func: Func) -> Option<(K, V)>
where
    S: Seq2<K, V>,
    Func: FnMut(&K, &V) -> bool,
{
    first_by(seq2, |(k, v)| (func)(k, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repeat_with, source_iter};

    #[test]
    fn first_of_infinite() {
        let counter = std::sync::atomic::AtomicU32::new(0);
        let seq = repeat_with(|| counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed));
        assert_eq!(Some(0), first(&seq));
        assert_eq!(Some(1), first(&seq));
    }

    #[test]
    fn first_by_and_empty() {
        assert_eq!(Some(4), first_by(source_iter(1..), |x| x % 4 == 0));
        assert_eq!(None, first(source_iter(Vec::<u8>::new())));
    }

    #[test]
    fn keyed() {
        let pairs = source_iter(vec![("a", 1), ("b", 2), ("c", 2)]);
        assert_eq!(Some(("a", 1)), first2(&pairs));
        assert_eq!(Some(("b", 2)), first_by2(&pairs, |_, v| *v == 2));
        assert_eq!(None, first_by2(&pairs, |k, _| k.is_empty()));
    }
}
