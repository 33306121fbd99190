//! [`Unique`], [`UniqueBy`], and related items.
use core::hash::Hash;

use rustc_hash::FxHashSet;

use crate::Seq;

/// Yields each distinct element once, the first time it is seen.
///
/// Seen elements are kept in a hash set for the duration of one traversal.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Unique<S> {
    seq: S,
}

impl<S> Unique<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    /// Creates deduplicating `seq`.
    pub fn new(seq: S) -> Self {
        Self { seq }
    }
}

impl<S> Seq for Unique<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut seen = FxHashSet::default();
        self.seq.drive(|item| {
            if seen.contains(&item) {
                return true;
            }
            seen.insert(item.clone());
            (sink)(item)
        })
    }
}

/// Like [`Unique`], but `func` decides equality. Each element is compared against every
/// element kept so far.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct UniqueBy<S, Func> {
    seq: S,
    func: Func,
}

impl<S, Func> UniqueBy<S, Func>
where
    S: Seq,
    S::Item: Clone,
    Func: Fn(&S::Item, &S::Item) -> bool,
{
    /// Creates deduplicating `seq` with equality `func`.
    pub fn new(seq: S, func: Func) -> Self {
        Self { seq, func }
    }
}

impl<S, Func> Seq for UniqueBy<S, Func>
where
    S: Seq,
    S::Item: Clone,
    Func: Fn(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut kept: Vec<S::Item> = Vec::new();
        self.seq.drive(|item| {
            if kept.iter().any(|prev| (self.func)(prev, &item)) {
                return true;
            }
            kept.push(item.clone());
            (sink)(item)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Seq, source_iter, unique, unique_by};

    #[test]
    fn first_seen_order() {
        let seq = unique(source_iter([3, 1, 3, 2, 1, 4]));
        insta::assert_snapshot!(format!("{:?}", seq.collect::<Vec<_>>()), @"[3, 1, 2, 4]");
    }

    #[test]
    fn unique_over_infinite_with_limit() {
        let seq = source_iter((0..).map(|x| x % 3)).unique().limit(3);
        assert_eq!(vec![0, 1, 2], seq.collect::<Vec<_>>());
    }

    #[test]
    fn unique_by_parity() {
        let seq = unique_by(source_iter(1..=10), |a, b| a % 2 == b % 2);
        assert_eq!(vec![1, 2], seq.collect::<Vec<_>>());
    }
}
