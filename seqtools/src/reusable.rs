//! [`Reusable`] and related items.
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::Seq;

/// Caches the elements of a sequence as they are produced, so it can be driven again without
/// rerunning the producer.
///
/// A traversal replays the cache first. If an earlier traversal stopped before the producer was
/// exhausted, the producer is then driven again and the cached prefix skipped, so the cache
/// keeps growing until one traversal reaches the end. Nothing is ever evicted.
#[must_use = "sequences do nothing unless driven"]
pub struct Reusable<S>
where
    S: Seq,
{
    seq: S,
    cache: Mutex<Cache<S::Item>>,
}

struct Cache<T> {
    items: Vec<T>,
    done: bool,
}

impl<S> Reusable<S>
where
    S: Seq,
    S::Item: Clone,
{
    /// Creates caching `seq`.
    pub fn new(seq: S) -> Self {
        Self {
            seq,
            cache: Mutex::new(Cache {
                items: Vec::new(),
                done: false,
            }),
        }
    }

    /// Returns how many elements are cached so far.
    pub fn cached(&self) -> usize {
        self.lock().items.len()
    }

    fn lock(&self) -> MutexGuard<'_, Cache<S::Item>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The cached element at `index`, or whether the producer is known to be exhausted.
    fn cached_at(&self, index: usize) -> Result<S::Item, bool> {
        let cache = self.lock();
        cache.items.get(index).cloned().ok_or(cache.done)
    }
}

impl<S> Seq for Reusable<S>
where
    S: Seq,
    S::Item: Clone,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        // The lock is never held while `sink` runs.
        let mut yielded = 0;
        loop {
            match self.cached_at(yielded) {
                Ok(item) => {
                    yielded += 1;
                    if !(sink)(item) {
                        return false;
                    }
                }
                Err(true) => return true,
                Err(false) => break,
            }
        }

        let mut index = 0;
        let mut stopped = false;
        let exhausted = self.seq.drive(|item| {
            let position = index;
            index += 1;
            {
                let mut cache = self.lock();
                if position == cache.items.len() {
                    cache.items.push(item.clone());
                }
            }
            if position < yielded {
                return true;
            }
            yielded += 1;
            stopped = !(sink)(item);
            !stopped
        });
        if exhausted && !stopped {
            self.lock().done = true;
        }
        !stopped
    }
}
