//! Animation primitives for the notes screen
//!
//! Every signal the screen animates (search activation, empty state slide-in,
//! FAB offset, list spring-back) is a [`TimedValue`] sampled once per frame.
//!
//! # Layers
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - Progress and linear interpolation helpers
//! - `interpolate` - Clamped piecewise-linear range mapping
//!
//! ## L3 Molecular Layer
//! - `transition` - Timed ramp of a single value toward a target
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use notepeek_core::animation::{TimedValue, EasingType};
//!
//! let start = Instant::now();
//! let mut progress = TimedValue::new(0.0, EasingType::Linear);
//! progress.animate_to(1.0, Duration::from_millis(400), start);
//!
//! let halfway = progress.sample(start + Duration::from_millis(200));
//! assert!((halfway - 0.5).abs() < 1e-9);
//! assert_eq!(progress.sample(start + Duration::from_millis(400)), 1.0);
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod interpolate;
pub mod timing;

// L3 Molecular Layer
pub mod transition;

pub use crate::config::EasingType;
pub use easing::EasingTypeExt;
pub use interpolate::interpolate;
pub use transition::TimedValue;
