use core::cmp::Ordering;

use crate::Seq;
use crate::source::SourceIter;

/// Drives `seq` to exhaustion right away, sorts the elements, and returns a sequence replaying
/// them in order. The sort is stable.
pub fn sort<S>(seq: S) -> SourceIter<Vec<S::Item>>
where
    S: Seq,
    S::Item: Ord + Clone,
{
    sort_by(seq, Ord::cmp)
}

/// Like [`sort`], ordering elements with `cmp`.
pub fn sort_by<S, Func>(seq: S, cmp: Func) -> SourceIter<Vec<S::Item>>
where
    S: Seq,
    S::Item: Clone,
    Func: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut items: Vec<S::Item> = seq.collect();
    items.sort_by(cmp);
    SourceIter::new(items)
}
