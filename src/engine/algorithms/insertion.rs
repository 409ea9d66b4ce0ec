//! Insertion sort driver

use crate::engine::cancel::Progress;
use crate::engine::step::SortContext;

/// Insertion sort. Each key is held out while larger prefix elements shift
/// right one slot at a time; every shift and the final key placement are
/// separate write events.
pub(crate) fn sort(a: &mut [u32], cx: &mut SortContext) -> Progress {
    let n = a.len();
    for i in 1..n {
        cx.guard()?;
        let key = a[i];
        let done: Vec<usize> = (0..i).collect();
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            cx.guard()?;
            cx.record_comparison();
            a[j] = a[j - 1];
            cx.record_write();
            cx.emit(a, &[j - 1], &[j], &done)?;
            j -= 1;
        }
        cx.guard()?;
        a[j] = key;
        cx.record_write();
        let done: Vec<usize> = (0..=i).collect();
        cx.emit(a, &[], &[j], &done)?;
    }
    Ok(())
}
