//! [`Limit`], [`After`], [`AfterBy`], [`Stop`], and related items.
use crate::Seq;

/// Same as [`core::iter::Take`] but as a [`Seq`].
///
/// Reaching the limit counts as exhaustion, not as an early stop.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Limit<S> {
    seq: S,
    n: usize,
}

impl<S> Limit<S>
where
    S: Seq,
{
    /// Creates yielding at most `n` elements of `seq`.
    pub fn new(seq: S, n: usize) -> Self {
        Self { seq, n }
    }
}

impl<S> Seq for Limit<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        if self.n == 0 {
            return true;
        }
        let mut taken = 0;
        let mut stopped = false;
        self.seq.drive(|item| {
            taken += 1;
            if !(sink)(item) {
                stopped = true;
                return false;
            }
            taken < self.n
        });
        !stopped
    }
}

/// Same as [`core::iter::Skip`] but as a [`Seq`].
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct After<S> {
    seq: S,
    n: usize,
}

impl<S> After<S>
where
    S: Seq,
{
    /// Creates skipping the first `n` elements of `seq`.
    pub fn new(seq: S, n: usize) -> Self {
        Self { seq, n }
    }
}

impl<S> Seq for After<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut skipped = 0;
        self.seq.drive(|item| {
            if skipped < self.n {
                skipped += 1;
                return true;
            }
            (sink)(item)
        })
    }
}

/// Same as [`core::iter::SkipWhile`] but as a [`Seq`].
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct AfterBy<S, Func> {
    seq: S,
    func: Func,
}

impl<S, Func> AfterBy<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    /// Creates dropping elements of `seq` while `func` matches.
    pub fn new(seq: S, func: Func) -> Self {
        Self { seq, func }
    }
}

impl<S, Func> Seq for AfterBy<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut dropping = true;
        self.seq.drive(|item| {
            if dropping && (self.func)(&item) {
                return true;
            }
            dropping = false;
            (sink)(item)
        })
    }
}

/// Like [`core::iter::TakeWhile`] with the predicate inverted: ends at the first element
/// matching `func`, which is discarded.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Stop<S, Func> {
    seq: S,
    func: Func,
}

impl<S, Func> Stop<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    /// Creates ending `seq` at the first match of `func`.
    pub fn new(seq: S, func: Func) -> Self {
        Self { seq, func }
    }
}

impl<S, Func> Seq for Stop<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut stopped = false;
        self.seq.drive(|item| {
            if (self.func)(&item) {
                return false;
            }
            stopped = !(sink)(item);
            !stopped
        });
        !stopped
    }
}
