use core::cmp::Ordering;

use crate::Seq;

/// Returns the smallest element. Among equal elements the first one wins.
pub fn min<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
    S::Item: Ord,
{
    min_by(seq, Ord::cmp)
}

/// Returns the smallest element according to `cmp`. Among equal elements the first one wins.
pub fn min_by<S, Func>(seq: S, mut cmp: Func) -> Option<S::Item>
where
    S: Seq,
    Func: FnMut(&S::Item, &S::Item) -> Ordering,
{
    select(seq, |item, best| (cmp)(item, best) == Ordering::Less)
}

/// Returns the largest element. Among equal elements the first one wins.
pub fn max<S>(seq: S) -> Option<S::Item>
where
    S: Seq,
    S::Item: Ord,
{
    max_by(seq, Ord::cmp)
}

/// Returns the largest element according to `cmp`. Among equal elements the first one wins.
pub fn max_by<S, Func>(seq: S, mut cmp: Func) -> Option<S::Item>
where
    S: Seq,
    Func: FnMut(&S::Item, &S::Item) -> Ordering,
{
    select(seq, |item, best| (cmp)(item, best) == Ordering::Greater)
}

/// Keeps the first element, replacing it whenever `replaces` says a later one should.
fn select<S, Func>(seq: S, mut replaces: Func) -> Option<S::Item>
where
    S: Seq,
    Func: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut best: Option<S::Item> = None;
    seq.drive(|item| {
        if best.as_ref().is_none_or(|current| (replaces)(&item, current)) {
            best = Some(item);
        }
        true
    });
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_iter;

    #[test]
    fn min_and_max() {
        assert_eq!(Some(-2), min(source_iter([3, -2, 7, 0])));
        assert_eq!(Some(7), max(source_iter([3, -2, 7, 0])));
        assert_eq!(None, min(source_iter(Vec::<i32>::new())));
        assert_eq!(None, max(source_iter(Vec::<i32>::new())));
    }

    #[test]
    fn ties_keep_first() {
        let words = source_iter(["bb", "a", "cc", "d"]);
        assert_eq!(Some("a"), min_by(&words, |a, b| a.len().cmp(&b.len())));
        assert_eq!(Some("bb"), max_by(&words, |a, b| a.len().cmp(&b.len())));
    }
}
