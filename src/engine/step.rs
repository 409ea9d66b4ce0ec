//! Step emission: visible frames, engine events, and the suspension point
//!
//! Every sort publishes its progress as a stream of [`EngineEvent`]s through
//! an [`EventSink`]. The [`SortContext`] owns the per-run plumbing (token,
//! sink, delay, counters) and exposes [`SortContext::emit`], the engine's
//! *only* suspension point: algorithms make no progress without calling it,
//! which is what lets a stop request catch up to a running sort within one
//! delay interval.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rustc_hash::FxHashSet;

use crate::engine::cancel::{CancelToken, Cancelled, Progress};
use crate::engine::stats::RunStats;

/// One published visual state: a snapshot of the working array plus the
/// index roles for this step.
///
/// `values` is always an owned copy, never a view of the live array, so a
/// consumer can hold a frame across later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFrame {
    pub values: Vec<u32>,
    /// Indices currently being examined.
    pub compared: Vec<usize>,
    /// Indices just written or swapped.
    pub touched: Vec<usize>,
    /// Indices proven to be in final sorted position.
    pub finalized: Vec<usize>,
}

impl StepFrame {
    /// Build a frame, enforcing role disjointness: an index carries at most
    /// one role per frame, with precedence finalized > touched > compared.
    pub fn new(
        values: Vec<u32>,
        compared: &[usize],
        touched: &[usize],
        finalized: &[usize],
    ) -> Self {
        let finalized_set: FxHashSet<usize> = finalized.iter().copied().collect();
        let touched: Vec<usize> = touched
            .iter()
            .copied()
            .filter(|idx| !finalized_set.contains(idx))
            .collect();
        let touched_set: FxHashSet<usize> = touched.iter().copied().collect();
        let compared = compared
            .iter()
            .copied()
            .filter(|idx| !finalized_set.contains(idx) && !touched_set.contains(idx))
            .collect();
        StepFrame {
            values,
            compared,
            touched,
            finalized: finalized.to_vec(),
        }
    }
}

/// Lifecycle of the run controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running,
    Stopped,
    Done,
}

/// Everything the engine tells the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Step(StepFrame),
    Stats(RunStats),
    Status(RunStatus),
}

/// Consumer of engine events. The UI plugs in an `mpsc` sender; tests plug
/// in recording doubles.
pub trait EventSink {
    fn publish(&self, event: EngineEvent);
}

impl EventSink for mpsc::Sender<EngineEvent> {
    fn publish(&self, event: EngineEvent) {
        // A hung-up receiver just means nobody is watching anymore.
        let _ = self.send(event);
    }
}

/// Per-run context handed to a driver: cancellation token, event sink,
/// frame delay, and the live counters.
pub struct SortContext<'a> {
    token: &'a CancelToken,
    sink: &'a dyn EventSink,
    delay: Duration,
    stats: RunStats,
}

impl<'a> SortContext<'a> {
    pub fn new(token: &'a CancelToken, sink: &'a dyn EventSink, delay: Duration) -> Self {
        SortContext {
            token,
            sink,
            delay,
            stats: RunStats::new(),
        }
    }

    /// Checkpoint: unwind if cancellation has been requested.
    pub fn guard(&self) -> Progress {
        if self.token.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    pub fn record_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    /// Record one write event. Both halves of a swap are a single event.
    pub fn record_write(&mut self) {
        self.stats.writes += 1;
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Publish the current state and suspend for the frame delay.
    ///
    /// If the token is already raised nothing is published and the caller
    /// unwinds immediately; the token is re-checked on resumption so a stop
    /// that lands mid-sleep also cuts the run short.
    pub fn emit(
        &mut self,
        values: &[u32],
        compared: &[usize],
        touched: &[usize],
        finalized: &[usize],
    ) -> Progress {
        self.guard()?;
        self.sink.publish(EngineEvent::Stats(self.stats));
        self.sink.publish(EngineEvent::Step(StepFrame::new(
            values.to_vec(),
            compared,
            touched,
            finalized,
        )));
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.guard()
    }
}
