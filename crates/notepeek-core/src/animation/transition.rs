//! L3 Molecular Layer: Timed transition of a single value
//!
//! Combines easing and timing into a ramp from the current value to a target
//! over a fixed duration, sampled once per frame.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// In-flight ramp
#[derive(Debug, Clone, Copy)]
struct Ramp {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
}

/// A value that moves toward its target over time
///
/// Starting a new transition while one is in flight abandons the old
/// trajectory and ramps from wherever the value is at that instant.
#[derive(Debug, Clone)]
pub struct TimedValue {
    value: f64,
    ramp: Option<Ramp>,
    easing: EasingType,
}

impl TimedValue {
    pub fn new(value: f64, easing: EasingType) -> Self {
        Self {
            value,
            ramp: None,
            easing,
        }
    }

    /// Value as of the last sample
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Where the value is heading (the current value when settled)
    pub fn target(&self) -> f64 {
        self.ramp.map(|r| r.to).unwrap_or(self.value)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.ramp.is_some()
    }

    /// Jump to `value` immediately, dropping any ramp
    pub fn set(&mut self, value: f64) {
        self.ramp = None;
        self.value = value;
    }

    /// Start a ramp toward `target`
    pub fn animate_to(&mut self, target: f64, duration: Duration, now: Instant) {
        let from = self.sample(now);

        if duration.is_zero() || from == target {
            self.set(target);
            return;
        }

        self.ramp = Some(Ramp {
            start: now,
            from,
            to: target,
            duration,
        });
    }

    /// Advance to `now` and return the current value
    pub fn sample(&mut self, now: Instant) -> f64 {
        if let Some(ramp) = self.ramp {
            if is_complete(ramp.start, now, ramp.duration) {
                self.value = ramp.to;
                self.ramp = None;
            } else {
                let t = self.easing.apply(progress(ramp.start, now, ramp.duration));
                let (lo, hi) = if ramp.from <= ramp.to {
                    (ramp.from, ramp.to)
                } else {
                    (ramp.to, ramp.from)
                };
                self.value = lerp(ramp.from, ramp.to, t).clamp(lo, hi);
            }
        }
        self.value
    }
}
