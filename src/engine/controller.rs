//! Run controller: lifecycle of a single sorting run
//!
//! The controller owns the cancellation token and the running flag, spawns
//! one worker per run against a private copy of the array, and forwards all
//! engine events through a single sender so the consumer sees them in
//! exactly the order the algorithm produced them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

use crate::engine::algorithms::{self, Algorithm};
use crate::engine::cancel::{CancelToken, Cancelled};
use crate::engine::delay::delay_for_level;
use crate::engine::stats::RunStats;
use crate::engine::step::{EngineEvent, EventSink, RunStatus, SortContext};

/// Orchestrates one run at a time. Start requests while a run is active are
/// rejected, not queued, so the working array always has exactly one
/// mutator.
pub struct Controller {
    token: CancelToken,
    running: Arc<AtomicBool>,
    events: mpsc::Sender<EngineEvent>,
    worker: Option<JoinHandle<()>>,
}

impl Controller {
    pub fn new(events: mpsc::Sender<EngineEvent>) -> Self {
        Controller {
            token: CancelToken::new(),
            running: Arc::new(AtomicBool::new(false)),
            events,
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Begin a run over a private copy of `snapshot`.
    ///
    /// Silent no-op if the array is empty or a run is already active
    /// (misuse is recoverable here, never an error). Publishes zeroed stats
    /// and a `Running` status before the worker produces its first frame.
    pub fn start(&mut self, snapshot: &[u32], algorithm: Algorithm, speed_level: u8) {
        if snapshot.is_empty() {
            return;
        }
        if self.running.swap(true, Ordering::AcqRel) {
            return;
        }
        // The flag was down, so any previous worker has already terminated.
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }

        self.token.clear();
        self.events.publish(EngineEvent::Stats(RunStats::new()));
        self.events.publish(EngineEvent::Status(RunStatus::Running));

        let token = self.token.clone();
        let running = Arc::clone(&self.running);
        let events = self.events.clone();
        let delay = delay_for_level(speed_level);
        let mut values = snapshot.to_vec();

        self.worker = Some(thread::spawn(move || {
            let mut cx = SortContext::new(&token, &events, delay);
            let outcome = algorithms::run(algorithm, &mut values, &mut cx);
            let status = match outcome {
                Err(Cancelled) => RunStatus::Stopped,
                Ok(()) => {
                    // Terminal flush: every index finalized. A stop that
                    // lands this late still wins.
                    let all: Vec<usize> = (0..values.len()).collect();
                    match cx.emit(&values, &[], &[], &all) {
                        Ok(()) => RunStatus::Done,
                        Err(Cancelled) => RunStatus::Stopped,
                    }
                }
            };
            // Reset before announcing: once the terminal status is
            // observable, the controller accepts a fresh start.
            token.clear();
            running.store(false, Ordering::Release);
            events.publish(EngineEvent::Status(status));
        }));
    }

    /// Request cancellation of the active run. No-op when idle. The worker
    /// observes the token at its next checkpoint, so the run winds down
    /// within one delay interval at most.
    pub fn stop(&self) {
        if self.is_running() {
            self.token.cancel();
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}
