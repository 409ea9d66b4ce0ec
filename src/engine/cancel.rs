//! Cooperative cancellation for in-flight sorts
//!
//! A [`CancelToken`] is a cloneable handle over a single shared flag. The
//! controller raises it, and the running driver observes it at well-defined
//! checkpoints (loop heads and every emission). Drivers never clear the
//! token themselves; the controller resets it once the run has fully
//! terminated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for one run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation. The running driver picks this up at its next
    /// checkpoint, so the worst-case latency is one delay interval.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Reset for the next run. Called by the controller only, after the
    /// previous run has terminated.
    pub fn clear(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Marker returned by a checkpoint that observed a raised token.
///
/// Drivers propagate it with `?`, which unwinds recursive calls level by
/// level without any further mutation or emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Result of one unit of driver work: keep going, or unwind.
pub type Progress = Result<(), Cancelled>;
