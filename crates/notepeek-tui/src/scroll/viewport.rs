//! Scroll offset of the note list, in device-independent pixels

use std::time::{Duration, Instant};

use notepeek_core::animation::TimedValue;
use notepeek_core::AnimationConfig;
use tracing::debug;

/// Furthest the list can be pulled past either end
pub const MAX_OVERSCROLL: f64 = 120.0;

/// A wheel/key gesture counts as released after this much idle time
const RELEASE_IDLE: Duration = Duration::from_millis(150);

/// Active pointer drag
#[derive(Debug, Clone, Copy)]
struct DragState {
    anchor_row: u16,
    anchor_offset: f64,
}

/// Result of advancing the viewport by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportUpdate {
    /// Current scroll offset
    pub offset: f64,
    /// Offset at the moment an idle gesture was released this frame
    pub released: Option<f64>,
}

/// Scroll state of the note list
///
/// Call `update()` once per frame to advance spring-back and detect released
/// wheel/key gestures. Pointer drags report their release from `end_drag()`.
#[derive(Debug, Clone)]
pub struct ListViewport {
    offset: TimedValue,
    content_height: f64,
    viewport_height: f64,
    bounces: bool,
    drag: Option<DragState>,
    /// Last wheel/key scroll of a gesture that has not been released yet
    last_gesture: Option<Instant>,
    px_per_row: f64,
    bounce_duration: Duration,
}

impl ListViewport {
    pub fn new(config: &AnimationConfig, px_per_row: f64) -> Self {
        Self {
            offset: TimedValue::new(0.0, config.easing),
            content_height: 0.0,
            viewport_height: 0.0,
            bounces: true,
            drag: None,
            last_gesture: None,
            px_per_row,
            bounce_duration: Duration::from_millis(config.bounce_duration_ms),
        }
    }

    /// Current scroll offset (negative while overscrolled above the top)
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset.value()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Check if there's pending work (spring-back or an unreleased gesture)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.offset.is_animating() || self.last_gesture.is_some()
    }

    /// Largest resting offset
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn overscroll_allowance(&self) -> f64 {
        if self.bounces {
            MAX_OVERSCROLL
        } else {
            0.0
        }
    }

    fn clamp_gesture(&self, offset: f64) -> f64 {
        let slack = self.overscroll_allowance();
        offset.clamp(-slack, self.max_offset() + slack)
    }

    fn resting(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Content and viewport heights in pixels
    pub fn set_bounds(&mut self, content_height: f64, viewport_height: f64) {
        self.content_height = content_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        if !self.is_dragging() && self.last_gesture.is_none() && !self.offset.is_animating() {
            let offset = self.offset.value();
            let resting = self.resting(offset);
            if resting != offset {
                self.offset.set(resting);
            }
        }
    }

    /// Enable or disable overscroll; disabling snaps back into bounds
    pub fn set_bounces(&mut self, bounces: bool) {
        if self.bounces == bounces {
            return;
        }
        self.bounces = bounces;
        if !bounces {
            let offset = self.offset.value();
            self.offset.set(self.clamp_gesture(offset));
        }
    }

    pub fn begin_drag(&mut self, row: u16) {
        self.last_gesture = None;
        self.drag = Some(DragState {
            anchor_row: row,
            anchor_offset: self.offset.value(),
        });
    }

    /// Follow the pointer; dragging down pulls the content down (offset decreases)
    pub fn drag_to(&mut self, row: u16) -> f64 {
        if let Some(drag) = self.drag {
            let rows = drag.anchor_row as f64 - row as f64;
            let offset = self.clamp_gesture(drag.anchor_offset + rows * self.px_per_row);
            self.offset.set(offset);
        }
        self.offset.value()
    }

    /// Pointer released; returns the offset at release if a drag was active
    pub fn end_drag(&mut self, now: Instant) -> Option<f64> {
        self.drag.take()?;
        let released = self.offset.value();
        self.spring_back(now);
        Some(released)
    }

    /// Wheel or key scroll by `delta` pixels (positive = down)
    pub fn scroll_by(&mut self, delta: f64, now: Instant) -> f64 {
        let from = self.offset.sample(now);
        self.offset.set(self.clamp_gesture(from + delta));
        self.last_gesture = Some(now);
        self.offset.value()
    }

    /// Animate to the top of the list
    pub fn jump_to_top(&mut self, now: Instant) {
        self.last_gesture = None;
        self.offset.animate_to(0.0, self.bounce_duration, now);
    }

    /// Animate to the bottom of the list
    pub fn jump_to_bottom(&mut self, now: Instant) {
        self.last_gesture = None;
        self.offset.animate_to(self.max_offset(), self.bounce_duration, now);
    }

    fn spring_back(&mut self, now: Instant) {
        let offset = self.offset.value();
        let resting = self.resting(offset);
        if resting != offset {
            debug!(from = offset, to = resting, "List spring-back");
            self.offset.animate_to(resting, self.bounce_duration, now);
        }
    }

    /// Advance one frame
    pub fn update(&mut self, now: Instant) -> ViewportUpdate {
        let mut released = None;

        if let Some(last) = self.last_gesture {
            if now.saturating_duration_since(last) >= RELEASE_IDLE {
                self.last_gesture = None;
                released = Some(self.offset.value());
                self.spring_back(now);
            }
        }

        ViewportUpdate {
            offset: self.offset.sample(now),
            released,
        }
    }
}
