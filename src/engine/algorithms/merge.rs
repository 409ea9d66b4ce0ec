//! Merge sort driver

use crate::engine::cancel::Progress;
use crate::engine::step::SortContext;

/// Top-down merge sort. A cancelled frame inside a merge propagates `?` up
/// through every recursion level, unwinding the whole call tree without
/// further work.
///
/// Merge has no growing correct-prefix the way the quadratic sorts do, so
/// no finalized indices are published mid-run; the terminal flush marks
/// them all at once.
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
    let mid = lo + (hi - lo) / 2;
    sort_range(a, lo, mid, cx)?;
    sort_range(a, mid + 1, hi, cx)?;
    merge(a, lo, mid, hi, cx)
}

fn merge(a: &mut [u32], lo: usize, mid: usize, hi: usize, cx: &mut SortContext) -> Progress {
    cx.guard()?;
    let left: Vec<u32> = a[lo..=mid].to_vec();
    let right: Vec<u32> = a[mid + 1..=hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;
    while i < left.len() && j < right.len() {
        cx.record_comparison();
        cx.emit(a, &[k], &[], &[])?;
        // Left run wins ties, keeping equal elements in input order.
        if left[i] <= right[j] {
            a[k] = left[i];
            i += 1;
        } else {
            a[k] = right[j];
            j += 1;
        }
        cx.record_write();
        cx.emit(a, &[], &[k], &[])?;
        k += 1;
    }

    while i < left.len() {
        cx.guard()?;
        a[k] = left[i];
        i += 1;
        cx.record_write();
        cx.emit(a, &[], &[k], &[])?;
        k += 1;
    }

    while j < right.len() {
        cx.guard()?;
        a[k] = right[j];
        j += 1;
        cx.record_write();
        cx.emit(a, &[], &[k], &[])?;
        k += 1;
    }

    Ok(())
}
