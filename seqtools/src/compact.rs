//! [`Compact`], [`CompactBy`], and related items.
use crate::Seq;

/// Collapses each run of consecutive equal elements into its first element.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Compact<S> {
    seq: S,
}

impl<S> Compact<S>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    /// Creates compacting `seq`.
    pub fn new(seq: S) -> Self {
        Self { seq }
    }
}

impl<S> Seq for Compact<S>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    type Item = S::Item;

    fn drive<F>(&self, sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        compact_with(&self.seq, PartialEq::eq, sink)
    }
}

/// Like [`Compact`], but `func` decides whether two consecutive elements are equal.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct CompactBy<S, Func> {
    seq: S,
    func: Func,
}

impl<S, Func> CompactBy<S, Func>
where
    S: Seq,
    S::Item: Clone,
    Func: Fn(&S::Item, &S::Item) -> bool,
{
    /// Creates compacting `seq` with equality `func`.
    pub fn new(seq: S, func: Func) -> Self {
        Self { seq, func }
    }
}

impl<S, Func> Seq for CompactBy<S, Func>
where
    S: Seq,
    S::Item: Clone,
    Func: Fn(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(&self, sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        compact_with(&self.seq, &self.func, sink)
    }
}

fn compact_with<S, Eq, F>(seq: &S, eq: Eq, mut sink: F) -> bool
where
    S: Seq,
    S::Item: Clone,
    Eq: Fn(&S::Item, &S::Item) -> bool,
    F: FnMut(S::Item) -> bool,
{
    let mut prev: Option<S::Item> = None;
    seq.drive(|item| {
        if prev.as_ref().is_some_and(|prev| (eq)(prev, &item)) {
            return true;
        }
        prev = Some(item.clone());
        (sink)(item)
    })
}
