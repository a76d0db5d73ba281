//! Async range on a tokio task
//!
//! The task pushes values into a single-slot `mpsc` channel and stops as
//! soon as the stream is cancelled or dropped.

use oprs_core::OprsResult;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{RangeArgs, Step};

/// Consumer handle for a range produced on a tokio task
pub struct RangeStream<T> {
    rx: mpsc::Receiver<T>,
    cancel: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

/// Spawn a task producing the range described by `args`
///
/// Must be called from within a tokio runtime. The arity error, if any, is
/// returned before anything is spawned.
pub fn spawn_range<T: Step>(args: &[T]) -> OprsResult<RangeStream<T>> {
    let range = RangeArgs::from_args(args)?;
    let (tx, rx) = mpsc::channel(1);
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        for value in range.iter() {
            tokio::select! {
                biased;
                _ = &mut cancel_rx => {
                    debug!("range stream cancelled");
                    return;
                }
                sent = tx.send(value) => {
                    if sent.is_err() {
                        debug!("range stream abandoned by consumer");
                        return;
                    }
                }
            }
        }
        debug!("range stream finished");
    });

    Ok(RangeStream {
        rx,
        cancel: Some(cancel_tx),
        handle: Some(handle),
    })
}

/// Like [`spawn_range`], panicking on a bad argument count
pub fn must_spawn_range<T: Step>(args: &[T]) -> RangeStream<T> {
    spawn_range(args).unwrap_or_else(|e| panic!("{e}"))
}

impl<T: Send + 'static> RangeStream<T> {
    /// Receive the next value, or `None` once the range is exhausted or cancelled
    pub async fn recv(&mut self) -> Option<T> {
        if self.cancel.is_none() {
            return None;
        }
        self.rx.recv().await
    }

    /// Stop the producer task
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The task may already have finished
            let _ = cancel.send(());
        }
        self.rx.close();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }

    /// Drain every remaining value
    pub async fn collect(mut self) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(value) = self.recv().await {
            out.push(value);
        }
        out
    }

    /// Cancel and wait for the producer task to exit
    pub async fn shutdown(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("range stream task failed: {}", e);
            }
        }
    }
}

impl<T> std::fmt::Debug for RangeStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeStream")
            .field("cancelled", &self.cancel.is_none())
            .finish_non_exhaustive()
    }
}
