//! Selection sort driver

use crate::engine::cancel::Progress;
use crate::engine::step::SortContext;

/// Selection sort. The prefix `[0, i)` is final before each outer step;
/// the scan highlights the current minimum candidate against the scan
/// pointer, and only a strictly smaller element displaces the candidate.
pub(crate) fn sort(a: &mut [u32], cx: &mut SortContext) -> Progress {
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        let done: Vec<usize> = (0..i).collect();
        let mut min_idx = i;
        for j in i + 1..n {
            cx.guard()?;
            cx.record_comparison();
            cx.emit(a, &[min_idx, j], &[], &done)?;
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        cx.guard()?;
        if min_idx != i {
            a.swap(i, min_idx);
            cx.record_write();
            let done: Vec<usize> = (0..=i).collect();
            cx.emit(a, &[], &[i, min_idx], &done)?;
        }
    }
    Ok(())
}
