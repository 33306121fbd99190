//! [`WithCancel`] and related items.
use tokio_util::sync::CancellationToken;

use crate::Seq;

/// Ends a sequence once a [`CancellationToken`] is cancelled.
///
/// The token is checked before each element. A cancelled traversal reports exhaustion, not an
/// early stop.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct WithCancel<S> {
    seq: S,
    token: CancellationToken,
}

impl<S> WithCancel<S>
where
    S: Seq,
{
    /// Creates ending `seq` when `token` is cancelled.
    pub fn new(seq: S, token: CancellationToken) -> Self {
        Self { seq, token }
    }
}

impl<S> Seq for WithCancel<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        if self.token.is_cancelled() {
            return true;
        }
        let mut cancelled = false;
        let exhausted = self.seq.drive(|item| {
            if self.token.is_cancelled() {
                cancelled = true;
                return false;
            }
            (sink)(item)
        });
        if cancelled {
            tracing::debug!("sequence cancelled");
        }
        exhausted || cancelled
    }
}
