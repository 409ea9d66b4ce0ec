//! Run statistics counters

/// Comparison and write counters for one run.
///
/// `comparisons` increments once per value-vs-value comparison a driver
/// evaluates. `writes` increments once per write event: a swap counts as one
/// event, as does each shift or copy during insertion and merge. Both are
/// monotonically non-decreasing within a run and reset to zero at run start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub comparisons: u64,
    pub writes: u64,
}

impl RunStats {
    pub fn new() -> Self {
        RunStats::default()
    }
}
