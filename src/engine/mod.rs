//! The stepping engine
//!
//! Interleaves synchronous sorting mutation with cooperative suspension
//! points so an external renderer can sample intermediate array states at a
//! user-controlled cadence, and so a stop request raised at any moment
//! promptly unwinds the in-flight driver, recursive calls included.
//!
//! - [`delay`] — speed level to frame delay.
//! - [`cancel`] — shared token + the `Cancelled` unwind marker.
//! - [`stats`] — comparison/write counters.
//! - [`step`] — visible frames, engine events, and the sole suspension
//!   point.
//! - [`algorithms`] — the five drivers.
//! - [`controller`] — run lifecycle (start/stop, worker thread, terminal
//!   flush).

pub mod algorithms;
pub mod cancel;
pub mod controller;
pub mod delay;
pub mod stats;
pub mod step;

pub use algorithms::Algorithm;
pub use cancel::{CancelToken, Cancelled, Progress};
pub use controller::Controller;
pub use stats::RunStats;
pub use step::{EngineEvent, EventSink, RunStatus, SortContext, StepFrame};
