use crate::{Seq, Seq2};

/// Returns whether any element equals `value`, stopping at the first match.
pub fn contains<S>(seq: S, value: &S::Item) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    contains_by(seq, |item| item == value)
}

/// Returns whether any element matches `func`, stopping at the first match.
pub fn contains_by<S, Func>(seq: S, mut func: Func) -> bool
where
    S: Seq,
    Func: FnMut(&S::Item) -> bool,
{
    let mut found = false;
    seq.drive(|item| {
        found = (func)(&item);
        !found
    });
    found
}

/// Returns whether any pair equals `(key, value)`.
pub fn contains2<S, K, V>(seq2: S, key: &K, value: &V) -> bool
where
    S: Seq2<K, V>,
    K: PartialEq,
    V: PartialEq,
{
    contains_by(seq2, |(k, v)| k == key && v == value)
}

/// Keyed [`contains_by`].
pub fn contains_by2<S, K, V, Func>(seq2: S, mut func: Func) -> bool
where
    S: Seq2<K, V>,
    Func: FnMut(&K, &V) -> bool,
{
    contains_by(seq2, |(k, v)| (func)(k, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repeat, source_iter};

    #[test]
    fn finds_in_infinite() {
        assert!(contains(source_iter(0..), &1000));
        assert!(contains(repeat('z'), &'z'));
    }

    #[test]
    fn missing() {
        assert!(!contains(source_iter([1, 2, 3]), &4));
        assert!(!contains_by(source_iter(Vec::<i32>::new()), |_| true));
    }

    #[test]
    fn keyed() {
        let pairs = source_iter(vec![("a", 1), ("b", 2)]);
        assert!(contains2(&pairs, &"b", &2));
        assert!(!contains2(&pairs, &"b", &1));
        assert!(contains_by2(&pairs, |k, v| *k == "a" && *v == 1));
    }
}
