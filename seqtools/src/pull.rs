//! [`Pull`], the push-to-pull adapter, and related items.
//!
//! A [`Seq`] pushes elements into a sink, a [`Pull`] lets the caller ask for them one at a time
//! instead. The producer runs on its own thread: it hands each element over a rendezvous channel
//! and then parks until the next element is requested, so it is never more than one element
//! ahead of the consumer.
use std::panic::resume_unwind;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle, Scope, ScopedJoinHandle};

use crate::{Seq, Seq2};

/// The thread driving a [`Pull`]'s producer.
enum Producer<'scope> {
    Detached(JoinHandle<()>),
    Scoped(ScopedJoinHandle<'scope, ()>),
}

impl Producer<'_> {
    fn join(self) -> thread::Result<()> {
        match self {
            Self::Detached(handle) => handle.join(),
            Self::Scoped(handle) => handle.join(),
        }
    }
}

/// A demand-driven handle over a [`Seq`].
///
/// Each call to [`Iterator::next`] resumes the producer for exactly one element. Once the
/// producer is exhausted every later call returns `None`.
///
/// [`Pull::release`] stops the producer and joins its thread. It is idempotent and also runs on
/// drop, so the producer is torn down on every exit path, including unwinding. A panic raised by
/// the producer is resumed on the thread that releases the handle.
#[must_use = "a pull handle does nothing unless `next` is called"]
pub struct Pull<'scope, T> {
    resume: Option<SyncSender<()>>,
    items: Option<Receiver<T>>,
    producer: Option<Producer<'scope>>,
}

impl<T> Pull<'static, T>
where
    T: Send + 'static,
{
    /// Creates a pull handle over an owned `seq`, on a detached thread.
    ///
    /// The producer does not start until the first element is requested.
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + Send + 'static,
    {
        let (resume, resume_recv) = mpsc::sync_channel(0);
        let (items_send, items) = mpsc::sync_channel(0);
        let handle = thread::spawn(move || produce(seq, resume_recv, items_send));
        Self {
            resume: Some(resume),
            items: Some(items),
            producer: Some(Producer::Detached(handle)),
        }
    }
}

impl<'scope, T> Pull<'scope, T>
where
    T: Send + 'scope,
{
    /// Creates a pull handle whose producer thread lives in `scope`, so `seq` may borrow from the
    /// enclosing stack frame.
    pub fn scoped<'env, S>(scope: &'scope Scope<'scope, 'env>, seq: S) -> Self
    where
        S: Seq<Item = T> + Send + 'scope,
    {
        let (resume, resume_recv) = mpsc::sync_channel(0);
        let (items_send, items) = mpsc::sync_channel(0);
        let handle = scope.spawn(move || produce(seq, resume_recv, items_send));
        Self {
            resume: Some(resume),
            items: Some(items),
            producer: Some(Producer::Scoped(handle)),
        }
    }
}

impl<T> Pull<'_, T> {
    /// Stops the producer and waits for its thread to exit.
    ///
    /// Calling this more than once is a no-op. If the producer panicked the panic is resumed
    /// here, unless the current thread is already unwinding.
    pub fn release(&mut self) {
        // Dropping both ends makes the producer's sink return `false`.
        self.resume = None;
        self.items = None;
        let Some(producer) = self.producer.take() else {
            return;
        };
        match producer.join() {
            Err(panic) if !thread::panicking() => resume_unwind(panic),
            _ => {}
        }
    }

    /// Returns `true` once the producer has been exhausted or released.
    pub fn is_released(&self) -> bool {
        self.producer.is_none()
    }
}

impl<T> Iterator for Pull<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (Some(resume), Some(items)) = (&self.resume, &self.items) else {
            return None;
        };
        let item = resume.send(()).ok().and_then(|()| items.recv().ok());
        if item.is_none() {
            self.release();
        }
        item
    }
}

impl<T> Drop for Pull<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Body of the producer thread.
fn produce<S>(seq: S, resume: Receiver<()>, items: SyncSender<S::Item>)
where
    S: Seq,
{
    if resume.recv().is_err() {
        tracing::trace!("pull released before the first element was requested");
        return;
    }
    let exhausted = seq.drive(|item| items.send(item).is_ok() && resume.recv().is_ok());
    tracing::trace!(exhausted, "pull producer finished");
}

/// Creates a [`Pull`] handle over `seq`. See [`Pull::new`].
pub fn pull<S>(seq: S) -> Pull<'static, S::Item>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    Pull::new(seq)
}

/// Creates a [`Pull`] handle over a sequence of pairs, yielding `(key, value)` tuples.
pub fn pull2<S, K, V>(seq2: S) -> Pull<'static, (K, V)>
where
    S: Seq2<K, V> + Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    Pull::new(seq2)
}
