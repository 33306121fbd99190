//! [`Zip`] and related items.
use std::thread;

use crate::{Pull, Seq};

/// Pairs the elements of two sequences in lockstep, see [`zip`].
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    seq1: A,
    seq2: B,
}

impl<A, B> Zip<A, B> {
    /// Creates from the two input sequences.
    pub fn new(seq1: A, seq2: B) -> Self {
        Self { seq1, seq2 }
    }
}

impl<A, B> Seq for Zip<A, B>
where
    A: Seq + Sync,
    B: Seq + Sync,
    A::Item: Send,
    B::Item: Send,
{
    type Item = (A::Item, B::Item);

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        thread::scope(|scope| {
            let mut pull1 = Pull::scoped(scope, &self.seq1);
            let mut pull2 = Pull::scoped(scope, &self.seq2);
            loop {
                let (Some(a), Some(b)) = (pull1.next(), pull2.next()) else {
                    return true;
                };
                if !(sink)((a, b)) {
                    return false;
                }
            }
        })
    }
}

/// Creates a [`Zip`] paired sequence from `seq1` and `seq2`.
///
/// Each round pulls one element from both inputs. The result ends, without error, as soon as
/// either input is exhausted, so its length is the shorter of the two.
///
/// ```rust
/// use seqtools::{Seq, source_iter, zip};
///
/// let pairs: Vec<_> = zip(source_iter([1, 2, 3]), source_iter(["a", "b"])).collect();
/// assert_eq!(vec![(1, "a"), (2, "b")], pairs);
/// ```
pub fn zip<A, B>(seq1: A, seq2: B) -> Zip<A, B>
where
    A: Seq,
    B: Seq,
{
    Zip::new(seq1, seq2)
}
