//! L4 Atomic Layer: Pure easing functions for timed transitions
//!
//! Maps input [0, 1] to output [0, 1] with various acceleration curves.

pub use crate::config::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOutQuad => quad_ease_in_out(t),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
        }
    }
}

/// Quadratic ease-in-out: 2t² below the midpoint, mirrored above it
#[inline]
fn quad_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = 1.0 - t;
        1.0 - 2.0 * inv * inv
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::EaseInOutQuad,
        EasingType::Cubic,
        EasingType::Quintic,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at t=0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                assert!((0.0..=1.0).contains(&v));
                prev = v;
            }
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(EasingType::Cubic.apply(-3.0), 0.0);
        assert_eq!(EasingType::EaseInOutQuad.apply(7.0), 1.0);
    }

    #[test]
    fn test_quad_midpoint() {
        assert!((EasingType::EaseInOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
