//! Floating action button keyboard dodge

use std::time::{Duration, Instant};

use crate::animation::{EasingType, TimedValue};
use crate::header::Transform;

/// Lifts the FAB above the keyboard while the list is empty
#[derive(Debug, Clone)]
pub struct FabAnimator {
    offset: TimedValue,
    duration: Duration,
}

impl FabAnimator {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            offset: TimedValue::new(0.0, easing),
            duration,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    /// Resting offset for the given inputs
    pub fn target_for(is_empty: bool, keyboard_height: f64) -> f64 {
        if is_empty {
            -keyboard_height
        } else {
            0.0
        }
    }

    /// Retarget when the inputs moved the resting offset, then sample
    pub fn update(&mut self, is_empty: bool, keyboard_height: f64, now: Instant) -> Transform {
        let target = Self::target_for(is_empty, keyboard_height);
        if target != self.offset.target() {
            self.offset.animate_to(target, self.duration, now);
        }
        Transform::IDENTITY.translated_y(self.offset.sample(now))
    }
}
