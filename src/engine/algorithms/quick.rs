//! Quick sort driver

use crate::engine::cancel::{Cancelled, Progress};
use crate::engine::step::SortContext;

/// Lomuto quick sort with the last element of each partition as pivot.
/// Worst-case recursion depth is O(n) on degenerate input; there is no
/// iteration cap, cancellation is the only early exit.
///
/// Like merge sort, finalized indices are only published by the terminal
/// flush.
pub(crate) fn sort(a: &mut [u32], cx: &mut SortContext) -> Progress {
    if a.is_empty() {
        return Ok(());
    }
    sort_range(a, 0, a.len() - 1, cx)
}

fn sort_range(a: &mut [u32], lo: usize, hi: usize, cx: &mut SortContext) -> Progress {
    cx.guard()?;
    if lo >= hi {
        return Ok(());
    }
    let pi = partition(a, lo, hi, cx)?;
    if pi > lo {
        sort_range(a, lo, pi - 1, cx)?;
    }
    if pi < hi {
        sort_range(a, pi + 1, hi, cx)?;
    }
    Ok(())
}

fn partition(
    a: &mut [u32],
    lo: usize,
    hi: usize,
    cx: &mut SortContext,
) -> Result<usize, Cancelled> {
    let pivot = a[hi];
    let mut store = lo;
    for j in lo..hi {
        cx.guard()?;
        cx.record_comparison();
        cx.emit(a, &[j, hi], &[], &[])?;
        // Strict comparison: elements equal to the pivot stay put.
        if a[j] < pivot {
            if store != j {
                a.swap(store, j);
                cx.record_write();
                cx.emit(a, &[], &[store, j], &[])?;
            }
            store += 1;
        }
    }
    a.swap(store, hi);
    cx.record_write();
    cx.emit(a, &[], &[store, hi], &[])?;
    Ok(store)
}
