//! Background persistence queue decoupling mutations from durability.

use std::{
    sync::{
        mpsc::{self, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
};

use tracing::{debug, warn};

use crate::storage::KeyValueStore;

enum Job {
    Put { key: String, json: String },
    Remove { key: String },
    Barrier(Sender<()>),
}

/// Serialises writes onto a single worker thread.
///
/// Jobs are applied strictly in submission order, so a later write for a key
/// can never be overtaken by an earlier one still in flight. Storage errors
/// are logged and swallowed; in-memory state stays the source of truth for
/// the session.
pub struct PersistQueue {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl PersistQueue {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                match job {
                    Job::Put { key, json } => {
                        if let Err(err) = storage.set(&key, &json) {
                            warn!(key = %key, error = %err, "persist write failed");
                        }
                    }
                    Job::Remove { key } => {
                        if let Err(err) = storage.delete(&key) {
                            warn!(key = %key, error = %err, "persist delete failed");
                        }
                    }
                    Job::Barrier(done) => {
                        let _ = done.send(());
                    }
                }
            }
            debug!("persistence worker drained and stopped");
        });
        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Queues a write for `key`. Never blocks on storage.
    pub fn put(&self, key: &str, json: String) {
        self.submit(Job::Put {
            key: key.to_string(),
            json,
        });
    }

    /// Queues removal of `key`.
    pub fn remove(&self, key: &str) {
        self.submit(Job::Remove {
            key: key.to_string(),
        });
    }

    /// Blocks until every job queued before this call has been applied.
    /// Mutation paths never call this; it exists for shutdown and tests.
    pub fn flush(&self) {
        let (done_tx, done_rx) = mpsc::channel();
        self.submit(Job::Barrier(done_tx));
        let _ = done_rx.recv();
    }

    fn submit(&self, job: Job) {
        if let Some(sender) = &self.sender {
            if sender.send(job).is_err() {
                warn!("persistence worker unavailable, dropping job");
            }
        }
    }
}

impl Drop for PersistQueue {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain outstanding jobs and
        // exit; joining makes clean shutdown flush best-effort durability.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
