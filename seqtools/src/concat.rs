//! [`Concat`] and related items.
use crate::Seq;

/// Yields every element of each sequence in turn.
///
/// An early stop inside any part ends the whole traversal.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Concat<S> {
    seqs: Vec<S>,
}

impl<S> Concat<S>
where
    S: Seq,
{
    /// Creates concatenating `seqs`.
    pub fn new(seqs: Vec<S>) -> Self {
        Self { seqs }
    }
}

impl<S> Seq for Concat<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        self.seqs.iter().all(|seq| seq.drive(&mut sink))
    }
}
