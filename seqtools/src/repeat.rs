//! [`Repeat`], [`RepeatWith`], and related items.
use crate::Seq;

/// Same as [`core::iter::Repeat`] but as a [`Seq`]: an infinite sequence of clones.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Repeat<T> {
    value: T,
}

impl<T> Repeat<T>
where
    T: Clone,
{
    /// Creates repeating `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Seq for Repeat<T>
where
    T: Clone,
{
    type Item = T;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        while (sink)(self.value.clone()) {}
        false
    }
}

/// Same as [`core::iter::RepeatWith`] but as a [`Seq`].
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct RepeatWith<Func> {
    func: Func,
}

impl<Func, T> RepeatWith<Func>
where
    Func: Fn() -> T,
{
    /// Creates calling `func` for every element.
    pub fn new(func: Func) -> Self {
        Self { func }
    }
}

impl<Func, T> Seq for RepeatWith<Func>
where
    Func: Fn() -> T,
{
    type Item = T;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        while (sink)((self.func)()) {}
        false
    }
}
