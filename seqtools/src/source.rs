//! [`SourceFn`], [`SourceIter`], and related items.
use core::marker::PhantomData;

use crate::Seq;

/// A [`Seq`] produced by a closure which pushes elements into the sink it is given.
#[must_use = "sequences do nothing unless driven"]
pub struct SourceFn<Func, Item> {
    func: Func,
    _phantom: PhantomData<fn() -> Item>,
}

impl<Func, Item> SourceFn<Func, Item>
where
    Func: Fn(&mut dyn FnMut(Item) -> bool) -> bool,
{
    /// Creates with producer `func`.
    pub fn new(func: Func) -> Self {
        Self {
            func,
            _phantom: PhantomData,
        }
    }
}

impl<Func, Item> Clone for SourceFn<Func, Item>
where
    Func: Clone,
{
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<Func, Item> Seq for SourceFn<Func, Item>
where
    Func: Fn(&mut dyn FnMut(Item) -> bool) -> bool,
{
    type Item = Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut stopped = false;
        let exhausted = (self.func)(&mut |item| {
            if stopped {
                return false;
            }
            stopped = !(sink)(item);
            !stopped
        });
        // A producer which ignores the sink's answer is still reported as stopped.
        exhausted && !stopped
    }
}

/// A [`Seq`] over a cloneable [`IntoIterator`], which is cloned anew for every traversal.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct SourceIter<I> {
    iter: I,
}

impl<I> SourceIter<I>
where
    I: IntoIterator + Clone,
{
    /// Creates from `iter`.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Seq for SourceIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn drive<F>(&self, sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        self.iter.clone().into_iter().all(sink)
    }
}
