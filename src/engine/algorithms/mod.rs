//! Algorithm drivers
//!
//! Five step-generating sorts sharing one checkpoint discipline: check the
//! token, perform one comparison or mutation (counting it), then emit a
//! frame through [`SortContext`](crate::engine::step::SortContext). They
//! differ only in algorithm and in which indices they mark compared,
//! touched, or finalized.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use crate::engine::cancel::Progress;
use crate::engine::step::SortContext;

/// The selectable sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    /// Selection order used by the UI (keys 1-5, tab cycling).
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// (time, space) complexity strings shown in the info pane.
    pub fn complexity(self) -> (&'static str, &'static str) {
        match self {
            Algorithm::Bubble => ("O(n²)", "O(1)"),
            Algorithm::Selection => ("O(n²)", "O(1)"),
            Algorithm::Insertion => ("O(n²) avg/worst, O(n) best", "O(1)"),
            Algorithm::Merge => ("O(n log n)", "O(n)"),
            Algorithm::Quick => ("O(n log n) avg, O(n²) worst", "O(log n)"),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Selection,
            Algorithm::Selection => Algorithm::Insertion,
            Algorithm::Insertion => Algorithm::Merge,
            Algorithm::Merge => Algorithm::Quick,
            Algorithm::Quick => Algorithm::Bubble,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Quick,
            Algorithm::Selection => Algorithm::Bubble,
            Algorithm::Insertion => Algorithm::Selection,
            Algorithm::Merge => Algorithm::Insertion,
            Algorithm::Quick => Algorithm::Merge,
        }
    }
}

/// Run the selected driver against the working array.
///
/// Returns `Err(Cancelled)` if the run was cut short; the array is left in
/// whatever intermediate state the last completed mutation produced.
pub fn run(algorithm: Algorithm, values: &mut [u32], cx: &mut SortContext) -> Progress {
    match algorithm {
        Algorithm::Bubble => bubble::sort(values, cx),
        Algorithm::Selection => selection::sort(values, cx),
        Algorithm::Insertion => insertion::sort(values, cx),
        Algorithm::Merge => merge::sort(values, cx),
        Algorithm::Quick => quick::sort(values, cx),
    }
}
