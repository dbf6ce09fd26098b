//! Background record loading with last-load-wins semantics.
//!
//! Each request runs on its own thread and reports back over an mpsc channel,
//! tagged with the generation it was issued under. Only the result of the most
//! recent request is ever delivered; results of superseded requests are
//! dropped when they arrive.

use super::{InputSource, LoadOutcome};
use crate::model::error::InputError;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// A finished load, tagged with its request generation.
#[derive(Debug)]
pub struct LoadResult {
    pub generation: u64,
    pub result: Result<LoadOutcome, InputError>,
}

/// Runs record loads off the UI thread.
#[derive(Debug)]
pub struct RecordLoader {
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
    /// Generation of the most recent request (0 = none issued).
    latest: u64,
    /// Generation of the most recent delivered result.
    delivered: u64,
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordLoader {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            latest: 0,
            delivered: 0,
        }
    }

    /// Start loading `source`. Supersedes any load still in flight.
    ///
    /// Returns the generation of the new request.
    pub fn request(&mut self, source: InputSource) -> u64 {
        self.request_with(move || source.load())
    }

    /// Start a load driven by an arbitrary closure.
    pub fn request_with<F>(&mut self, load: F) -> u64
    where
        F: FnOnce() -> Result<LoadOutcome, InputError> + Send + 'static,
    {
        self.latest += 1;
        let generation = self.latest;
        let sender = self.sender.clone();

        thread::spawn(move || {
            let result = load();
            // Receiver gone means the app is shutting down
            let _ = sender.send(LoadResult { generation, result });
        });

        tracing::debug!(generation, "Record load requested");
        generation
    }

    /// Non-blocking check for the latest load's result.
    ///
    /// Stale results found on the channel are discarded.
    pub fn poll(&mut self) -> Option<LoadResult> {
        let mut found = None;
        while let Ok(result) = self.receiver.try_recv() {
            if let Some(current) = self.accept(result) {
                found = Some(current);
            }
        }
        found
    }

    /// Block up to `timeout` for the latest load's result.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadResult> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(result) => {
                    if let Some(current) = self.accept(result) {
                        return Some(current);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None
                }
            }
        }
    }

    /// True while the most recent request has not been delivered.
    pub fn is_pending(&self) -> bool {
        self.delivered < self.latest
    }

    fn accept(&mut self, result: LoadResult) -> Option<LoadResult> {
        if result.generation == self.latest {
            self.delivered = result.generation;
            Some(result)
        } else {
            tracing::debug!(
                generation = result.generation,
                latest = self.latest,
                "Discarding superseded record load"
            );
            None
        }
    }
}
