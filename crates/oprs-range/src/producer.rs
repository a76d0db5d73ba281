//! Lazy producer on a dedicated thread
//!
//! A producer thread hands values to the consumer through a rendezvous
//! channel (`sync_channel(0)`): each handoff blocks until the consumer
//! receives. The consumer owns an explicit release path: `cancel()` (or
//! dropping the [`Producer`]) raises a stop flag, drops the receiver so a
//! blocked send fails, and joins the thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use oprs_core::{OprsError, OprsResult};
use tracing::{debug, warn};

/// Producer configuration
#[derive(Clone, Debug)]
pub struct ProducerConfig {
    /// Thread name, also used in log events
    pub name: String,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        ProducerConfig {
            name: "oprs-range".to_string(),
        }
    }
}

impl ProducerConfig {
    pub fn named(name: impl Into<String>) -> Self {
        ProducerConfig { name: name.into() }
    }
}

/// Producer side of the handoff
pub struct Handoff<T> {
    tx: SyncSender<T>,
    stop: Arc<AtomicBool>,
}

impl<T> Handoff<T> {
    /// Hand a value to the consumer, blocking until it is received
    /// Returns false once the consumer has cancelled or gone away
    pub fn offer(&self, value: T) -> bool {
        if self.is_cancelled() {
            return false;
        }
        self.tx.send(value).is_ok()
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }
}

/// Consumer side: an iterator over values produced on another thread
pub struct Producer<T> {
    rx: Option<Receiver<T>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    name: String,
}

impl<T: Send + 'static> Producer<T> {
    /// Start `body` on a new thread
    /// `body` should return as soon as [`Handoff::offer`] returns false
    pub fn spawn<F>(config: ProducerConfig, body: F) -> OprsResult<Self>
    where
        F: FnOnce(&Handoff<T>) + Send + 'static,
    {
        let (tx, rx) = sync_channel(0);
        let stop = Arc::new(AtomicBool::new(false));
        let handoff = Handoff {
            tx,
            stop: Arc::clone(&stop),
        };

        let name = config.name;
        let thread_name = name.clone();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                debug!(producer = %thread_name, "producer started");
                body(&handoff);
                debug!(producer = %thread_name, cancelled = handoff.is_cancelled(), "producer finished");
            })
            .map_err(|e| OprsError::ProducerSpawn {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        Ok(Producer {
            rx: Some(rx),
            stop,
            handle: Some(handle),
            name,
        })
    }
}

impl<T> Producer<T> {
    /// Stop the producer and release its thread
    /// Subsequent calls to `next` return `None`
    pub fn cancel(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        if !handle.is_finished() {
            debug!(producer = %self.name, "producer abandoned by consumer");
        }
        self.stop.store(true, Ordering::Release);
        // Unblocks a pending send
        self.rx = None;

        if handle.join().is_err() {
            warn!(producer = %self.name, "producer thread panicked");
        }
    }

    /// Check if the producer has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Iterator for Producer<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.rx.as_ref()?.recv().ok()
    }
}

impl<T> Drop for Producer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> std::fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Producer")
            .field("name", &self.name)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
