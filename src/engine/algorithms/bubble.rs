//! Bubble sort driver

use crate::engine::cancel::Progress;
use crate::engine::step::SortContext;

/// Adjacent-swap bubble sort. Each outer pass floats the largest remaining
/// value to the end, so the finalized suffix grows by one per pass; a pass
/// with zero swaps ends the run early.
pub(crate) fn sort(a: &mut [u32], cx: &mut SortContext) -> Progress {
    let n = a.len();
    for pass in 0..n.saturating_sub(1) {
        let done: Vec<usize> = (n - pass..n).collect();
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            cx.guard()?;
            cx.record_comparison();
            cx.emit(a, &[j, j + 1], &[], &done)?;
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                cx.record_write();
                cx.emit(a, &[], &[j, j + 1], &done)?;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}
