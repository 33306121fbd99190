#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use core::hash::Hash;

use sealed::sealed;
pub use tokio_util::sync::CancellationToken;

pub mod cancel;
pub mod chunk;
pub mod compact;
pub mod concat;
pub mod filter;
pub mod limit;
pub mod map;
pub mod pull;
pub mod repeat;
pub mod reusable;
pub mod source;
pub mod split;
pub mod try_seq;
pub mod unique;
pub mod zip;

mod average;
mod compare;
mod contains;
mod equal;
mod first;
mod last;
mod min_max;
mod reduce;
mod sort;

pub use average::{average, average_by};
use cancel::WithCancel;
use chunk::{Chunk, ChunkBy};
use compact::{Compact, CompactBy};
pub use compare::{compare, compare_by, compare_by2, compare2};
use concat::Concat;
pub use contains::{contains, contains_by, contains_by2, contains2};
pub use equal::{equal, equal_by, equal_by2, equal2};
use filter::Filter;
pub use first::{first, first_by, first_by2, first2};
pub use last::{last, last_by, last_by2, last2};
use limit::{After, AfterBy, Limit, Stop};
use map::Map;
pub use min_max::{max, max_by, min, min_by};
pub use pull::{Pull, pull, pull2};
pub use reduce::{reduce, reduce2};
use repeat::{Repeat, RepeatWith};
use reusable::Reusable;
pub use sort::{sort, sort_by};
use source::{SourceFn, SourceIter};
pub use split::{SplitHalf, SplitStream, split, split_buffered};
pub use try_seq::{collect_err, walk_err};
use try_seq::UntilErr;
use unique::{Unique, UniqueBy};
pub use zip::{Zip, zip};

/// A lazy, push-style sequence.
///
/// Driving a sequence runs its producer, which hands each element to a sink in production
/// order until the sink returns `false` or the producer runs out. Every call to
/// [`Seq::drive`] is a fresh traversal, unless the sequence caches ([`reusable`]) or is
/// single-pass by nature (the halves returned by [`split`]).
///
/// Adaptor methods consume `self` and build a new sequence, so chains read forward:
///
/// ```rust
/// use seqtools::{Seq, source_iter};
///
/// let evens: Vec<i32> = source_iter(1..=10)
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * 10)
///     .limit(3)
///     .collect();
/// assert_eq!(vec![20, 40, 60], evens);
/// ```
pub trait Seq {
    /// The element type.
    type Item;

    /// Runs one traversal, handing each element to `sink`.
    ///
    /// Returns `true` if the producer was exhausted and `false` if `sink` stopped it early.
    fn drive<F>(&self, sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool;

    /// Keeps the elements for which `func` returns `true`.
    fn filter<Func>(self, func: Func) -> Filter<Self, Func>
    where
        Self: Sized,
        Func: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, func)
    }

    /// Transforms each element with `func`.
    fn map<Func, Out>(self, func: Func) -> Map<Self, Func>
    where
        Self: Sized,
        Func: Fn(Self::Item) -> Out,
    {
        Map::new(self, func)
    }

    /// Yields at most `n` elements.
    fn limit(self, n: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit::new(self, n)
    }

    /// Skips the first `n` elements.
    fn after(self, n: usize) -> After<Self>
    where
        Self: Sized,
    {
        After::new(self, n)
    }

    /// Yields elements until `func` first matches, discarding the match.
    fn stop<Func>(self, func: Func) -> Stop<Self, Func>
    where
        Self: Sized,
        Func: Fn(&Self::Item) -> bool,
    {
        Stop::new(self, func)
    }

    /// Groups elements into `Vec`s of `size`; the last one may be shorter.
    fn chunk(self, size: usize) -> Chunk<Self>
    where
        Self: Sized,
    {
        Chunk::new(self, size)
    }

    /// Collapses runs of equal consecutive elements.
    fn compact(self) -> Compact<Self>
    where
        Self: Sized,
        Self::Item: PartialEq + Clone,
    {
        Compact::new(self)
    }

    /// Yields each distinct element once, in first-seen order.
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        Unique::new(self)
    }

    /// Caches every element so the result can be driven many times.
    fn reusable(self) -> Reusable<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Reusable::new(self)
    }

    /// Stops yielding once `token` is cancelled.
    fn with_cancel(self, token: CancellationToken) -> WithCancel<Self>
    where
        Self: Sized,
    {
        WithCancel::new(self, token)
    }

    /// Pairs elements with those of `other` in lockstep. See [`zip`].
    fn zip<Other>(self, other: Other) -> Zip<Self, Other>
    where
        Self: Sized,
        Other: Seq,
    {
        Zip::new(self, other)
    }

    /// Consumes every element with `func`.
    fn for_each<Func>(&self, mut func: Func)
    where
        Func: FnMut(Self::Item),
    {
        self.drive(|item| {
            (func)(item);
            true
        });
    }

    /// Drives the sequence to completion, extending a default `C` with every element.
    fn collect<C>(&self) -> C
    where
        C: Default + Extend<Self::Item>,
    {
        let mut out = C::default();
        self.drive(|item| {
            out.extend(Some(item));
            true
        });
        out
    }

    /// Drives the sequence to completion, counting the elements.
    fn count(&self) -> usize {
        let mut count = 0;
        self.drive(|_| {
            count += 1;
            true
        });
        count
    }
}

impl<S> Seq for &S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive<F>(&self, sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        (**self).drive(sink)
    }
}

/// A [`Seq`] of `(key, value)` pairs.
///
/// Keys are just the first of two correlated payloads, no uniqueness is implied. This trait is
/// sealed and implemented for every sequence of pairs.
#[sealed]
pub trait Seq2<K, V>: Seq<Item = (K, V)> {}

#[sealed]
impl<S, K, V> Seq2<K, V> for S where S: Seq<Item = (K, V)> {}

/// Creates a [`SourceFn`] sequence from a producer closure.
///
/// The closure receives the sink and must stop as soon as the sink returns `false`. It returns
/// whether it ran to exhaustion.
pub fn source_fn<Func, Item>(func: Func) -> SourceFn<Func, Item>
where
    Func: Fn(&mut dyn FnMut(Item) -> bool) -> bool,
{
    SourceFn::new(func)
}

/// Creates a [`SourceIter`] sequence which clones `iter` for every traversal.
pub fn source_iter<I>(iter: I) -> SourceIter<I>
where
    I: IntoIterator + Clone,
{
    SourceIter::new(iter)
}

/// Creates a [`Filter`] sequence keeping the elements matching `func`.
pub fn filter<S, Func>(seq: S, func: Func) -> Filter<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    Filter::new(seq, func)
}

/// Keyed [`filter`], `func` sees the key and value separately.
pub fn filter2<S, K, V, Func>(seq2: S, func: Func) -> Filter<S, impl Fn(&(K, V)) -> bool>
where
    S: Seq2<K, V>,
    Func: Fn(&K, &V) -> bool,
{
    Filter::new(seq2, move |(k, v): &(K, V)| (func)(k, v))
}

/// Creates a [`Map`] sequence applying `func` to each element.
pub fn map<S, Func, Out>(seq: S, func: Func) -> Map<S, Func>
where
    S: Seq,
    Func: Fn(S::Item) -> Out,
{
    Map::new(seq, func)
}

/// Keyed [`map`], transforming each pair into a new pair.
pub fn map2<S, K1, V1, K2, V2, Func>(
    seq2: S,
    func: Func,
) -> Map<S, impl Fn((K1, V1)) -> (K2, V2)>
where
    S: Seq2<K1, V1>,
    Func: Fn(K1, V1) -> (K2, V2),
{
    Map::new(seq2, move |(k, v): (K1, V1)| (func)(k, v))
}

/// Creates a [`Chunk`] sequence of `Vec`s holding `size` elements each.
///
/// The final chunk may be shorter. When `size` is zero no chunks are produced.
pub fn chunk<S>(seq: S, size: usize) -> Chunk<S>
where
    S: Seq,
{
    Chunk::new(seq, size)
}

/// Creates a [`ChunkBy`] sequence which starts a new chunk whenever `func` matches an element.
pub fn chunk_by<S, Func>(seq: S, func: Func) -> ChunkBy<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    ChunkBy::new(seq, func)
}

/// Keyed [`chunk`], yielding each chunk as separate key and value `Vec`s.
pub fn chunk2<S, K, V>(
    seq2: S,
    size: usize,
) -> Map<Chunk<S>, impl Fn(Vec<(K, V)>) -> (Vec<K>, Vec<V>)>
where
    S: Seq2<K, V>,
{
    Map::new(
        Chunk::new(seq2, size),
        |chunk: Vec<(K, V)>| -> (Vec<K>, Vec<V>) { chunk.into_iter().unzip() },
    )
}

/// Keyed [`chunk_by`], yielding each chunk as separate key and value `Vec`s.
pub fn chunk_by2<S, K, V, Func>(
    seq2: S,
    func: Func,
) -> Map<ChunkBy<S, impl Fn(&(K, V)) -> bool>, impl Fn(Vec<(K, V)>) -> (Vec<K>, Vec<V>)>
where
    S: Seq2<K, V>,
    Func: Fn(&K, &V) -> bool,
{
    let chunks = ChunkBy::new(seq2, move |(k, v): &(K, V)| (func)(k, v));
    Map::new(chunks, |chunk: Vec<(K, V)>| -> (Vec<K>, Vec<V>) {
        chunk.into_iter().unzip()
    })
}

/// Creates a [`Compact`] sequence collapsing consecutive duplicates.
pub fn compact<S>(seq: S) -> Compact<S>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    Compact::new(seq)
}

/// Creates a [`CompactBy`] sequence collapsing consecutive elements `func` considers equal.
pub fn compact_by<S, Func>(seq: S, func: Func) -> CompactBy<S, Func>
where
    S: Seq,
    S::Item: Clone,
    Func: Fn(&S::Item, &S::Item) -> bool,
{
    CompactBy::new(seq, func)
}

/// Keyed [`compact`], a pair is a duplicate when both key and value match the previous pair.
pub fn compact2<S, K, V>(seq2: S) -> Compact<S>
where
    S: Seq2<K, V>,
    K: PartialEq + Clone,
    V: PartialEq + Clone,
{
    Compact::new(seq2)
}

/// Keyed [`compact_by`], `func` receives `(key_a, value_a, key_b, value_b)`.
pub fn compact_by2<S, K, V, Func>(
    seq2: S,
    func: Func,
) -> CompactBy<S, impl Fn(&(K, V), &(K, V)) -> bool>
where
    S: Seq2<K, V>,
    K: Clone,
    V: Clone,
    Func: Fn(&K, &V, &K, &V) -> bool,
{
    CompactBy::new(seq2, move |(ak, av): &(K, V), (bk, bv): &(K, V)| {
        (func)(ak, av, bk, bv)
    })
}

/// Creates a [`Unique`] sequence yielding each distinct element once.
pub fn unique<S>(seq: S) -> Unique<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    Unique::new(seq)
}

/// Creates a [`UniqueBy`] sequence which decides distinctness with `func`.
///
/// Every new element is checked against every element kept so far.
pub fn unique_by<S, Func>(seq: S, func: Func) -> UniqueBy<S, Func>
where
    S: Seq,
    S::Item: Clone,
    Func: Fn(&S::Item, &S::Item) -> bool,
{
    UniqueBy::new(seq, func)
}

/// Creates a [`Limit`] sequence yielding at most `n` elements.
pub fn limit<S>(seq: S, n: usize) -> Limit<S>
where
    S: Seq,
{
    Limit::new(seq, n)
}

/// Keyed [`limit`].
pub fn limit2<S, K, V>(seq2: S, n: usize) -> Limit<S>
where
    S: Seq2<K, V>,
{
    Limit::new(seq2, n)
}

/// Same as [`limit`]: the elements before index `n`.
pub fn before<S>(seq: S, n: usize) -> Limit<S>
where
    S: Seq,
{
    Limit::new(seq, n)
}

/// Yields elements until `func` first matches. Same as [`stop`].
pub fn before_by<S, Func>(seq: S, func: Func) -> Stop<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    Stop::new(seq, func)
}

/// Creates an [`After`] sequence which skips the first `n` elements.
pub fn after<S>(seq: S, n: usize) -> After<S>
where
    S: Seq,
{
    After::new(seq, n)
}

/// Creates an [`AfterBy`] sequence which drops elements while `func` matches.
pub fn after_by<S, Func>(seq: S, func: Func) -> AfterBy<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    AfterBy::new(seq, func)
}

/// Creates a [`Stop`] sequence which ends at the first element matching `func`.
///
/// The matching element is discarded.
pub fn stop<S, Func>(seq: S, func: Func) -> Stop<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    Stop::new(seq, func)
}

/// Keyed [`stop`].
pub fn stop2<S, K, V, Func>(seq2: S, func: Func) -> Stop<S, impl Fn(&(K, V)) -> bool>
where
    S: Seq2<K, V>,
    Func: Fn(&K, &V) -> bool,
{
    Stop::new(seq2, move |(k, v): &(K, V)| (func)(k, v))
}

/// Creates an infinite [`Repeat`] sequence of `value`.
pub fn repeat<T>(value: T) -> Repeat<T>
where
    T: Clone,
{
    Repeat::new(value)
}

/// Creates an infinite [`RepeatWith`] sequence of `func()` results.
pub fn repeat_with<Func, T>(func: Func) -> RepeatWith<Func>
where
    Func: Fn() -> T,
{
    RepeatWith::new(func)
}

/// Yields `value` exactly `count` times.
pub fn repeat_n<T>(value: T, count: usize) -> Limit<Repeat<T>>
where
    T: Clone,
{
    Limit::new(Repeat::new(value), count)
}

/// Creates a [`Reusable`] sequence caching every element of `seq`.
///
/// The cache is never trimmed, so an unbounded `seq` means unbounded memory.
pub fn reusable<S>(seq: S) -> Reusable<S>
where
    S: Seq,
    S::Item: Clone,
{
    Reusable::new(seq)
}

/// Keyed [`reusable`].
pub fn reusable2<S, K, V>(seq2: S) -> Reusable<S>
where
    S: Seq2<K, V>,
    K: Clone,
    V: Clone,
{
    Reusable::new(seq2)
}

/// Creates a [`Concat`] sequence yielding every element of each of `seqs` in turn.
pub fn concat<S>(seqs: impl IntoIterator<Item = S>) -> Concat<S>
where
    S: Seq,
{
    Concat::new(seqs.into_iter().collect())
}

/// Keyed [`concat`].
pub fn concat2<S, K, V>(seqs2: impl IntoIterator<Item = S>) -> Concat<S>
where
    S: Seq2<K, V>,
{
    Concat::new(seqs2.into_iter().collect())
}

/// Creates a [`WithCancel`] sequence which ends once `token` is cancelled.
pub fn with_cancel<S>(token: CancellationToken, seq: S) -> WithCancel<S>
where
    S: Seq,
{
    WithCancel::new(seq, token)
}

/// Keyed [`with_cancel`].
pub fn with_cancel2<S, K, V>(token: CancellationToken, seq2: S) -> WithCancel<S>
where
    S: Seq2<K, V>,
{
    WithCancel::new(seq2, token)
}

/// Creates an [`UntilErr`] sequence of the `Ok` values before the first `Err`.
pub fn until_err<S, T, E>(seq: S) -> UntilErr<S>
where
    S: Seq<Item = Result<T, E>>,
{
    UntilErr::new(seq)
}
