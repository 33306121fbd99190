//! [`Filter`] and related items.
use crate::Seq;

/// Same as [`core::iter::Filter`] but as a [`Seq`].
///
/// Forwards the elements for which `func` returns `true`.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Filter<S, Func> {
    seq: S,
    func: Func,
}

impl<S, Func> Filter<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    /// Creates with filtering `func` over `seq`.
    pub fn new(seq: S, func: Func) -> Self {
        Self { seq, func }
    }
}

impl<S, Func> Seq for Filter<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        self.seq.drive(|item| !(self.func)(&item) || (sink)(item))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Seq, filter, filter2, source_iter};

    #[test]
    fn keeps_matching() {
        let odds = filter(source_iter(1..=9), |x| x % 2 == 1);
        insta::assert_snapshot!(format!("{:?}", odds.collect::<Vec<_>>()), @"[1, 3, 5, 7, 9]");
    }

    #[test]
    fn filter2_sees_key_and_value() {
        let pairs = source_iter(vec![("a", 1), ("b", 2), ("c", 3)]);
        let kept = filter2(pairs, |k, v| *k != "b" && *v < 3);
        assert_eq!(vec![("a", 1)], kept.collect::<Vec<_>>());
    }

    #[test]
    fn early_stop_is_forwarded() {
        let evens = source_iter(0..).filter(|x| x % 2 == 0);
        let mut seen = Vec::new();
        let exhausted = evens.drive(|x| {
            seen.push(x);
            seen.len() < 3
        });
        assert!(!exhausted);
        assert_eq!(vec![0, 2, 4], seen);
    }
}
