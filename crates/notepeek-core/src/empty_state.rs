//! Empty state slide-in

use std::time::{Duration, Instant};

use crate::animation::{interpolate, EasingType, TimedValue};
use crate::header::Transform;

const MAX_TRANSLATE_X: f64 = 50.0;
const MIN_TRANSLATE_X: f64 = 0.0;

/// Fades and slides the "No Results!" text in once the empty view is laid out
#[derive(Debug, Clone)]
pub struct EmptyStateAnimator {
    focused: TimedValue,
    mounted: bool,
    duration: Duration,
}

impl EmptyStateAnimator {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            focused: TimedValue::new(0.0, easing),
            mounted: false,
            duration,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.focused.is_animating()
    }

    /// Layout completed: start the slide-in (only once per mount)
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.focused.animate_to(1.0, self.duration, now);
    }

    /// Empty view removed; the next mount starts from scratch
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.focused.set(0.0);
    }

    pub fn sample(&mut self, now: Instant) -> Transform {
        let focused = self.focused.sample(now);
        Transform::IDENTITY
            .translated_x(interpolate(focused, &[0.0, 1.0], &[MAX_TRANSLATE_X, MIN_TRANSLATE_X]))
            .with_opacity(interpolate(focused, &[0.0, 1.0], &[0.0, 1.0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_hidden_before_layout() {
        let mut empty = EmptyStateAnimator::new(ms(200), EasingType::Linear);
        let style = empty.sample(Instant::now());
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_x, 50.0);
    }

    #[test]
    fn test_slides_in_over_duration() {
        let start = Instant::now();
        let mut empty = EmptyStateAnimator::new(ms(200), EasingType::Linear);
        empty.mount(start);

        let mid = empty.sample(start + ms(100));
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.translate_x - 25.0).abs() < 1e-9);

        let done = empty.sample(start + ms(200));
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.translate_x, 0.0);
    }

    #[test]
    fn test_repeated_layout_does_not_restart() {
        let start = Instant::now();
        let mut empty = EmptyStateAnimator::new(ms(200), EasingType::Linear);
        empty.mount(start);
        empty.sample(start + ms(200));
        empty.mount(start + ms(300));
        assert_eq!(empty.sample(start + ms(300)).opacity, 1.0);
    }

    #[test]
    fn test_remount_animates_again() {
        let start = Instant::now();
        let mut empty = EmptyStateAnimator::new(ms(200), EasingType::Linear);
        empty.mount(start);
        empty.sample(start + ms(200));
        empty.unmount();
        assert_eq!(empty.sample(start + ms(400)).opacity, 0.0);

        empty.mount(start + ms(500));
        assert_eq!(empty.sample(start + ms(500)).opacity, 0.0);
        assert!(empty.is_animating());
    }
}
