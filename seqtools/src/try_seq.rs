//! Helpers for sequences of [`Result`]s: [`UntilErr`], [`walk_err`], and [`collect_err`].
use crate::Seq;

/// Yields the `Ok` values of a sequence up to its first `Err`, which ends it.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct UntilErr<S> {
    seq: S,
}

impl<S, T, E> UntilErr<S>
where
    S: Seq<Item = Result<T, E>>,
{
    /// Creates over fallible `seq`.
    pub fn new(seq: S) -> Self {
        Self { seq }
    }
}

impl<S, T, E> Seq for UntilErr<S>
where
    S: Seq<Item = Result<T, E>>,
{
    type Item = T;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut stopped = false;
        self.seq.drive(|item| match item {
            Ok(value) => {
                stopped = !(sink)(value);
                !stopped
            }
            Err(_) => false,
        });
        !stopped
    }
}

/// Hands each `Ok` value to `func` until `func` returns `false` or an `Err` shows up.
///
/// Returns the first error, or `Ok(())` if there was none before the walk ended.
///
/// ```rust
/// use seqtools::{Seq, source_iter, walk_err};
///
/// let lines = source_iter(["1", "2", "x", "4"]).map(str::parse::<i32>);
/// let mut sum = 0;
/// let result = walk_err(&lines, |n| {
///     sum += n;
///     true
/// });
/// assert!(result.is_err());
/// assert_eq!(3, sum);
/// ```
pub fn walk_err<S, T, E, Func>(seq: S, mut func: Func) -> Result<(), E>
where
    S: Seq<Item = Result<T, E>>,
    Func: FnMut(T) -> bool,
{
    let mut error = None;
    seq.drive(|item| match item {
        Ok(value) => (func)(value),
        Err(err) => {
            error = Some(err);
            false
        }
    });
    error.map_or(Ok(()), Err)
}

/// Collects the `Ok` values before the first `Err`, alongside that error.
pub fn collect_err<S, T, E>(seq: S) -> (Vec<T>, Result<(), E>)
where
    S: Seq<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let result = walk_err(seq, |value| {
        values.push(value);
        true
    });
    (values, result)
}
