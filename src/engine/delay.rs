//! Playback speed policy
//!
//! Maps the discrete speed slider (1 = fastest, 8 = slowest) to the
//! suspension the emitter takes after publishing a frame.

use std::time::Duration;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 8;
pub const DEFAULT_SPEED: u8 = 4;

/// Per-frame delay for a speed level. Out-of-range levels fall back to the
/// mid-range default instead of failing.
pub fn delay_for_level(level: u8) -> Duration {
    let ms = match level {
        1 => 5,
        2 => 15,
        3 => 30,
        4 => 50,
        5 => 80,
        6 => 120,
        7 => 170,
        8 => 230,
        _ => 50,
    };
    Duration::from_millis(ms)
}
