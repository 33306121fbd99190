//! [`Map`] and related items.
use crate::Seq;

/// Same as [`core::iter::Map`] but as a [`Seq`].
///
/// Transforms each element with `func`.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Map<S, Func> {
    seq: S,
    func: Func,
}

impl<S, Func> Map<S, Func> {
    /// Creates with mapping `func` over `seq`.
    pub fn new(seq: S, func: Func) -> Self {
        Self { seq, func }
    }
}

impl<S, Func, Out> Seq for Map<S, Func>
where
    S: Seq,
    Func: Fn(S::Item) -> Out,
{
    type Item = Out;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        self.seq.drive(|item| (sink)((self.func)(item)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Seq, map, map2, source_iter};

    #[test]
    fn maps_each() {
        let squares = map(source_iter(1..=4), |x| x * x);
        insta::assert_snapshot!(format!("{:?}", squares.collect::<Vec<_>>()), @"[1, 4, 9, 16]");
    }

    #[test]
    fn map2_swaps() {
        let swapped = map2(source_iter(vec![(1, 'a'), (2, 'b')]), |k, v| (v, k));
        assert_eq!(vec![('a', 1), ('b', 2)], swapped.collect::<Vec<_>>());
    }

    #[test]
    fn chains_with_other_adaptors() {
        let words = source_iter(["a", "bb", "ccc"]).map(str::len).filter(|n| *n > 1);
        assert_eq!(vec![2, 3], words.collect::<Vec<_>>());
    }
}
