//! [`split`], [`SplitHalf`], [`SplitStream`], and related items.
//!
//! Splitting runs exactly one driver thread per call. The driver pushes the paired source once
//! and republishes each key and value on a dedicated bounded channel, so the two halves can be
//! consumed independently, even on different threads, while the n-th key still belongs to the
//! n-th value.
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::{Mutex, PoisonError};
use std::thread;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::{Seq, Seq2};

/// Name of the thread driving a split source.
const DRIVER_THREAD_NAME: &str = "split-driver";

/// Splits `seq2` into a sequence of its keys and a sequence of its values.
///
/// The source is driven once, by a background thread, in strict lockstep: the next pair is not
/// produced until the readers of both halves have taken the key and the value of the current
/// pair. The halves end when the source is exhausted or `token` is cancelled. A cancelled half
/// just looks exhausted.
///
/// Dropping one half discards its side for the remaining pairs; once both halves are dropped
/// the driver stops. If neither half is consumed and the source never ends, the driver blocks
/// until `token` is cancelled.
///
/// ```rust
/// use std::collections::HashMap;
///
/// use seqtools::{CancellationToken, Seq, source_iter, split, zip};
///
/// let input = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
/// let (keys, values) = split(CancellationToken::new(), source_iter(input.clone()));
/// let output: HashMap<_, _> = zip(keys, values).collect();
/// assert_eq!(input, output);
/// ```
pub fn split<S, K, V>(token: CancellationToken, seq2: S) -> (SplitHalf<K>, SplitHalf<V>)
where
    S: Seq2<K, V> + Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    spawn_driver(token, seq2, 1, true)
}

/// Like [`split`], but each side's channel holds up to `capacity` elements and the driver only
/// waits for room in it, letting the source and either consumer run ahead. A `capacity` of zero
/// is treated as one.
pub fn split_buffered<S, K, V>(
    token: CancellationToken,
    seq2: S,
    capacity: usize,
) -> (SplitHalf<K>, SplitHalf<V>)
where
    S: Seq2<K, V> + Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    spawn_driver(token, seq2, capacity.max(1), false)
}

fn spawn_driver<S, K, V>(
    token: CancellationToken,
    seq2: S,
    capacity: usize,
    lockstep: bool,
) -> (SplitHalf<K>, SplitHalf<V>)
where
    S: Seq2<K, V> + Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    let (keys_send, keys_recv) = mpsc::channel(capacity);
    let (values_send, values_recv) = mpsc::channel(capacity);

    let driver = Driver {
        token: token.clone(),
        keys: keys_send,
        values: values_send,
        lockstep,
    };
    let span = tracing::trace_span!("split_driver", capacity, lockstep);
    let spawned = thread::Builder::new()
        .name(DRIVER_THREAD_NAME.to_owned())
        .spawn(move || {
            let _guard = span.enter();
            driver.run(seq2);
        });
    if let Err(err) = spawned {
        // The driver, and with it both senders, is dropped, so both halves end empty.
        tracing::error!(%err, "failed to spawn split driver thread");
    }

    (
        SplitHalf::new(keys_recv, token.clone()),
        SplitHalf::new(values_recv, token),
    )
}

struct Driver<K, V> {
    token: CancellationToken,
    keys: mpsc::Sender<K>,
    values: mpsc::Sender<V>,
    lockstep: bool,
}

impl<K, V> Driver<K, V> {
    fn run<S>(self, seq2: S)
    where
        S: Seq2<K, V>,
    {
        let exhausted = seq2.drive(|(key, value): (K, V)| {
            if self.token.is_cancelled() {
                tracing::debug!("split cancelled, stopping driver");
                return false;
            }
            if self.keys.is_closed() && self.values.is_closed() {
                tracing::debug!("both split halves dropped, stopping driver");
                return false;
            }
            futures::executor::block_on(self.deliver(key, value))
        });
        tracing::trace!(exhausted, "split driver finished");
        // Dropping `self` closes both channels.
    }

    /// Hands both components of one pair to their halves, in whichever order the halves take
    /// them.
    ///
    /// Returns `false` if cancelled first.
    async fn deliver(&self, key: K, value: V) -> bool {
        let both = async {
            tokio::join!(
                hand_off(&self.keys, key, self.lockstep),
                hand_off(&self.values, value, self.lockstep),
            )
        };
        tokio::select! {
            biased;
            () = self.token.cancelled() => {
                tracing::debug!("split cancelled during delivery, stopping driver");
                false
            }
            ((), ()) = both => true,
        }
    }
}

/// Sends `item` to one half. With `lockstep`, also waits until that half's reader has received
/// it.
///
/// A dropped half settles immediately and `item` is discarded.
async fn hand_off<T>(send: &mpsc::Sender<T>, item: T, lockstep: bool) {
    let Ok(permit) = send.reserve().await else {
        return;
    };
    permit.send(item);
    if lockstep {
        // The channel's single slot is free again only once the reader has received `item`.
        let _ = send.reserve().await;
    }
}

/// One side of a [`split`]: the keys or the values.
///
/// Driving a half blocks the current thread on its channel. A half is single-pass: a second
/// traversal resumes where the previous one stopped. Use [`SplitHalf::into_stream`] to consume it
/// from async code instead.
pub struct SplitHalf<T> {
    recv: Mutex<mpsc::Receiver<T>>,
    token: CancellationToken,
}

impl<T> SplitHalf<T> {
    fn new(recv: mpsc::Receiver<T>, token: CancellationToken) -> Self {
        Self {
            recv: Mutex::new(recv),
            token,
        }
    }

    /// Converts into a [`Stream`] over the same channel.
    pub fn into_stream(self) -> SplitStream<T> {
        let recv = self
            .recv
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        SplitStream {
            recv,
            cancelled: Box::pin(self.token.clone().cancelled_owned()),
            token: self.token,
        }
    }
}

impl<T> Seq for SplitHalf<T> {
    type Item = T;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut recv = self.recv.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            let item = futures::executor::block_on(async {
                tokio::select! {
                    biased;
                    () = self.token.cancelled() => None,
                    item = recv.recv() => item,
                }
            });
            let Some(item) = item else {
                return true;
            };
            if !(sink)(item) {
                return false;
            }
        }
    }
}

/// [`Stream`] over one side of a [`split`], see [`SplitHalf::into_stream`].
///
/// Ends when the driver closes the channel or the token is cancelled.
#[must_use = "streams do nothing unless polled"]
pub struct SplitStream<T> {
    recv: mpsc::Receiver<T>,
    token: CancellationToken,
    cancelled: Pin<Box<WaitForCancellationFutureOwned>>,
}

// No field is structurally pinned.
impl<T> Unpin for SplitStream<T> {}

impl<T> Stream for SplitStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.token.is_cancelled() || this.cancelled.as_mut().poll(cx).is_ready() {
            return Poll::Ready(None);
        }
        this.recv.poll_recv(cx)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc as std_mpsc;
    use std::time::{Duration, Instant};

    use futures::StreamExt;

    use super::*;
    use crate::{first, map, repeat, source_iter, zip};

    const TIMEOUT: Duration = Duration::from_secs(10);
    /// Long enough for a driver that ran ahead to have pulled again.
    const SETTLE: Duration = Duration::from_millis(200);

    /// Sends on drop, to observe when the driver lets go of its source.
    struct DropSignal(std_mpsc::Sender<()>);

    impl Drop for DropSignal {
        fn drop(&mut self) {
            let _ = self.0.send(());
        }
    }

    #[test]
    fn map_round_trip() {
        let input = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
        let (keys, values) = split(CancellationToken::new(), source_iter(input.clone()));
        let output: HashMap<_, _> = zip(keys, values).collect();
        assert_eq!(input, output);
    }

    #[test]
    fn halves_on_separate_threads_keep_order() {
        let source = source_iter(vec![(1, "one"), (2, "two"), (3, "three")]);
        let (keys, values) = split(CancellationToken::new(), source);
        let keys = thread::spawn(move || keys.collect::<Vec<_>>());
        let values = thread::spawn(move || values.collect::<Vec<_>>());
        assert_eq!(vec![1, 2, 3], keys.join().unwrap());
        assert_eq!(vec!["one", "two", "three"], values.join().unwrap());
    }

    #[test]
    fn buffered_halves_can_be_read_one_after_the_other() {
        let source = source_iter(vec![('a', 1), ('b', 2), ('c', 3)]);
        let (keys, values) = split_buffered(CancellationToken::new(), source, 3);
        assert_eq!(vec!['a', 'b', 'c'], keys.collect::<Vec<_>>());
        assert_eq!(vec![1, 2, 3], values.collect::<Vec<_>>());
    }

    #[test]
    fn exhausted_half_stays_exhausted() {
        let (keys, values) = split(CancellationToken::new(), source_iter(vec![(1, 1)]));
        let pairs: Vec<_> = zip(&keys, &values).collect();
        assert_eq!(vec![(1, 1)], pairs);
        assert!(keys.drive(|_| true));
        assert_eq!(0, values.count());
    }

    #[test]
    fn dropping_one_half_does_not_block_the_other() {
        let (keys, values) = split(
            CancellationToken::new(),
            source_iter(vec![(1, "one"), (2, "two"), (3, "three")]),
        );
        drop(values);
        assert_eq!(vec![1, 2, 3], keys.collect::<Vec<_>>());
    }

    #[test]
    fn cancel_after_second_pair_does_not_hang() {
        let token = CancellationToken::new();
        let cancel = token.clone();
        let source = map(
            source_iter(vec![(1, "one"), (2, "two"), (3, "three")]),
            move |(k, v)| {
                if k == 2 {
                    cancel.cancel();
                }
                (k, v)
            },
        );
        let (keys, values) = split(token, source);

        let (done_send, done_recv) = std_mpsc::channel();
        thread::spawn(move || {
            let keys = thread::spawn(move || keys.collect::<Vec<_>>());
            let values = thread::spawn(move || values.collect::<Vec<_>>());
            let _ = done_send.send((keys.join().unwrap(), values.join().unwrap()));
        });
        let (keys, values) = done_recv.recv_timeout(TIMEOUT).unwrap();
        assert!(keys.len() <= 2, "{keys:?}");
        assert!(values.len() <= 2, "{values:?}");
    }

    #[test]
    fn cancel_unblocks_idle_driver() {
        let token = CancellationToken::new();
        let (signal_send, signal_recv) = std_mpsc::channel();
        let guard = DropSignal(signal_send);
        let source = map(repeat((0, 0)), move |pair| {
            let _keep = &guard;
            pair
        });
        let (keys, values) = split(token.clone(), source);
        token.cancel();
        signal_recv.recv_timeout(TIMEOUT).unwrap();
        assert_eq!(0, keys.count());
        assert_eq!(0, values.count());
    }

    #[test]
    fn dropping_both_halves_stops_driver() {
        let (signal_send, signal_recv) = std_mpsc::channel();
        let guard = DropSignal(signal_send);
        let source = map(repeat(("k", "v")), move |pair| {
            let _keep = &guard;
            pair
        });
        let (keys, values) = split(CancellationToken::new(), source);
        drop(keys);
        drop(values);
        signal_recv.recv_timeout(TIMEOUT).unwrap();
    }

    #[tokio::test]
    async fn halves_as_streams() {
        let source = source_iter(vec![(1, 'a'), (2, 'b'), (3, 'c')]);
        let (keys, values) = split(CancellationToken::new(), source);
        let (keys, values) = futures::join!(
            keys.into_stream().collect::<Vec<_>>(),
            values.into_stream().collect::<Vec<_>>()
        );
        assert_eq!(vec![1, 2, 3], keys);
        assert_eq!(vec!['a', 'b', 'c'], values);
    }

    #[tokio::test]
    async fn cancelled_stream_ends() {
        let token = CancellationToken::new();
        let (keys, _values) = split(token.clone(), repeat((1, 1)));
        let mut keys = keys.into_stream();
        token.cancel();
        assert_eq!(None, keys.next().await);
    }

    /// Waits up to `TIMEOUT` for `counter` to reach `expected`.
    fn wait_for(counter: &AtomicUsize, expected: usize) {
        let deadline = Instant::now() + TIMEOUT;
        while counter.load(Ordering::SeqCst) < expected && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(expected, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn next_pair_waits_for_both_reads() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = pulled.clone();
        let source = map(source_iter(0..10), move |i| {
            counter.fetch_add(1, Ordering::SeqCst);
            (i, i * 10)
        });
        let (keys, values) = split(CancellationToken::new(), source);

        wait_for(&pulled, 1);
        thread::sleep(SETTLE);
        assert_eq!(1, pulled.load(Ordering::SeqCst));

        assert_eq!(Some(0), first(&keys));
        thread::sleep(SETTLE);
        assert_eq!(1, pulled.load(Ordering::SeqCst));

        assert_eq!(Some(0), first(&values));
        wait_for(&pulled, 2);
        thread::sleep(SETTLE);
        assert_eq!(2, pulled.load(Ordering::SeqCst));
    }

    #[test]
    fn buffered_split_runs_ahead() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = pulled.clone();
        let source = map(source_iter(0..10), move |i| {
            counter.fetch_add(1, Ordering::SeqCst);
            (i, i)
        });
        let (_keys, _values) = split_buffered(CancellationToken::new(), source, 4);
        // Four pairs fill both channels, the fifth waits for room.
        wait_for(&pulled, 5);
    }

    #[test]
    fn source_runs_on_the_driver_thread() {
        let threads = Arc::new(Mutex::new(Vec::new()));
        let record = threads.clone();
        let source = map(source_iter(0..3), move |i| {
            let name = thread::current().name().map(str::to_owned);
            record.lock().unwrap().push(name);
            (i, i)
        });
        let (keys, values) = split(CancellationToken::new(), source);
        assert_eq!(3, zip(keys, values).count());
        let threads = threads.lock().unwrap();
        assert_eq!(3, threads.len());
        assert!(
            threads.iter().all(|name| name.as_deref() == Some(DRIVER_THREAD_NAME)),
            "{threads:?}"
        );
    }

    #[test]
    fn stream_is_unpin() {
        fn assert_unpin<T: Unpin>() {}
        assert_unpin::<SplitStream<String>>();
    }
}
