//! # Introduction
//!
//! sortty animates five classic in-memory sorting algorithms over a random
//! array in the terminal, built with [ratatui](https://docs.rs/ratatui).
//! The interesting part is the stepping engine: sorts run on a worker
//! thread and publish owned snapshots of the array (plus compared, touched,
//! and finalized index roles) through a channel, suspending after each
//! frame for a speed-controlled delay. A stop request raises a shared
//! token that every driver observes at its next checkpoint, unwinding even
//! recursive sorts within one delay interval.
//!
//! ## Pipeline
//!
//! ```text
//! Array → Algorithm Driver → StepFrame stream → TUI bars
//!              ↑ CancelToken (cooperative stop)
//! ```
//!
//! 1. [`engine`] — delay policy, cancellation, counters, the step emitter,
//!    the five drivers, and the run controller.
//! 2. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble (early exit), selection, insertion, top-down merge (stable,
//! left run wins ties), and Lomuto quick sort (last-element pivot).

pub mod engine;
pub mod ui;
