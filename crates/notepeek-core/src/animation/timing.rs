//! L4 Atomic Layer: Time calculation utilities for timed transitions
//!
//! Time is always passed in explicitly so a frame samples every signal at the
//! same instant.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
