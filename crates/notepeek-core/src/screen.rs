//! List screen orchestration
//!
//! Owns every signal of the notes screen and wires UI events into the search
//! activation state machine:
//!
//! - drag released past the threshold → ramp activation to 1
//! - search control tapped → ramp activation to 1
//! - cancel → clear the query, ramp activation to 0
//!
//! [`ListScreen::tick`] is the per-frame evaluation; the host calls it once
//! per frame and then drains focus changes with
//! [`ListScreen::apply_focus_intents`] on its interactive side.

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::animation::TimedValue;
use crate::config::AnimationConfig;
use crate::controller::{apply_intent, Activation, FocusIntent, FocusTarget, SearchActivationController};
use crate::empty_state::EmptyStateAnimator;
use crate::fab::FabAnimator;
use crate::header::{HeaderStyles, Transform, SEARCH_ACTIVATION_THRESHOLD_Y};
use crate::notes::{Note, NoteList};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct ScreenFrame {
    pub scroll_y: f64,
    pub activation: Activation,
    pub header: HeaderStyles,
    /// `None` while the list has results
    pub empty_state: Option<Transform>,
    pub fab: Transform,
    pub bounces: bool,
    pub visible_count: usize,
}

pub struct ListScreen {
    notes: NoteList,
    visible: Vec<Note>,
    query: String,
    scroll_y: f64,
    activation: TimedValue,
    activation_duration: Duration,
    controller: SearchActivationController,
    intents: mpsc::UnboundedReceiver<FocusIntent>,
    empty_state: EmptyStateAnimator,
    fab: FabAnimator,
    keyboard_height: f64,
}

impl ListScreen {
    pub fn new(notes: NoteList, config: &AnimationConfig) -> Self {
        let (controller, intents) = SearchActivationController::new();
        let visible = notes.filter("");
        Self {
            notes,
            visible,
            query: String::new(),
            scroll_y: 0.0,
            activation: TimedValue::new(0.0, config.easing),
            activation_duration: Duration::from_millis(config.activation_duration_ms),
            controller,
            intents,
            empty_state: EmptyStateAnimator::new(
                Duration::from_millis(config.empty_state_duration_ms),
                config.easing,
            ),
            fab: FabAnimator::new(Duration::from_millis(config.fab_duration_ms), config.easing),
            keyboard_height: 0.0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Notes currently shown
    pub fn visible(&self) -> &[Note] {
        &self.visible
    }

    pub fn source(&self) -> &NoteList {
        &self.notes
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn keyboard_height(&self) -> f64 {
        self.keyboard_height
    }

    /// Activation progress as of the last frame
    pub fn activation_progress(&self) -> f64 {
        self.activation.value()
    }

    /// Where activation is heading (0 or 1)
    pub fn activation_target(&self) -> f64 {
        self.activation.target()
    }

    /// Search state as of the last evaluated frame
    pub fn is_search_active(&self) -> bool {
        self.controller.is_active()
    }

    /// Overscroll bounce is only allowed while nothing is being searched
    pub fn bounces_enabled(&self) -> bool {
        self.query.is_empty()
    }

    /// Whether the next frames still change without new input
    pub fn is_animating(&self) -> bool {
        self.activation.is_animating() || self.empty_state.is_animating() || self.fab.is_animating()
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll_y = offset;
    }

    /// Pointer released after a drag; returns whether search activation started
    pub fn on_drag_release(&mut self, offset: f64, now: Instant) -> bool {
        if offset < SEARCH_ACTIVATION_THRESHOLD_Y {
            debug!(offset, "Overscroll released past threshold");
            self.animate_activation(1.0, now);
            true
        } else {
            false
        }
    }

    pub fn on_search_tap(&mut self, now: Instant) {
        debug!("Search control tapped");
        self.animate_activation(1.0, now);
    }

    pub fn on_cancel(&mut self, now: Instant) {
        debug!(progress = self.activation.value(), "Search cancelled");
        self.on_query_change("");
        self.animate_activation(0.0, now);
    }

    pub fn on_query_change(&mut self, text: &str) {
        self.query = text.to_string();
        self.visible = self.notes.filter(&self.query);
        if !self.visible.is_empty() {
            self.empty_state.unmount();
        }
    }

    /// Layout of the empty view completed
    pub fn on_empty_layout(&mut self, now: Instant) {
        if self.visible.is_empty() {
            self.empty_state.mount(now);
        }
    }

    pub fn on_keyboard_change(&mut self, height: f64) {
        self.keyboard_height = height.max(0.0);
    }

    fn animate_activation(&mut self, target: f64, now: Instant) {
        self.activation
            .animate_to(target.clamp(0.0, 1.0), self.activation_duration, now);
    }

    /// Per-frame evaluation of every derived signal and style
    pub fn tick(&mut self, now: Instant) -> ScreenFrame {
        let progress = self.activation.sample(now);
        let activation = self.controller.evaluate(self.scroll_y, progress);
        let header = HeaderStyles::compute(self.scroll_y, activation.progress, activation.show_scale_max);

        let is_empty = self.visible.is_empty();
        let empty_state = is_empty.then(|| self.empty_state.sample(now));
        let fab = self.fab.update(is_empty, self.keyboard_height, now);

        ScreenFrame {
            scroll_y: self.scroll_y,
            activation,
            header,
            empty_state,
            fab,
            bounces: self.bounces_enabled(),
            visible_count: self.visible.len(),
        }
    }

    /// Interactive-side drain of the focus queue; returns how many intents ran
    pub fn apply_focus_intents(&mut self, mut target: Option<&mut dyn FocusTarget>) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.intents.try_recv() {
            apply_intent(intent, target.as_deref_mut());
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Input {
        focused: bool,
        calls: u32,
    }

    impl FocusTarget for Input {
        fn focus(&mut self) {
            self.focused = true;
            self.calls += 1;
        }

        fn blur(&mut self) {
            self.focused = false;
            self.calls += 1;
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn screen() -> ListScreen {
        ListScreen::new(
            NoteList::new(vec![Note::new(1, "First Item", "This is the first item")]),
            &AnimationConfig::default(),
        )
    }

    /// Run frames every 16ms from `start` for `duration`
    fn run_frames(screen: &mut ListScreen, start: Instant, duration: Duration) -> Vec<ScreenFrame> {
        let mut frames = Vec::new();
        let mut t = Duration::ZERO;
        while t <= duration {
            frames.push(screen.tick(start + t));
            t += ms(16);
        }
        frames
    }

    #[test]
    fn test_release_past_threshold_activates() {
        let start = Instant::now();
        let mut s = screen();
        s.on_scroll(-51.0);
        assert!(s.on_drag_release(-51.0, start));
        assert_eq!(s.activation_target(), 1.0);

        let frame = s.tick(start + ms(400));
        assert!(frame.activation.is_search_active);
    }

    #[test]
    fn test_release_short_of_threshold_does_nothing() {
        let start = Instant::now();
        let mut s = screen();
        s.on_scroll(-49.0);
        assert!(!s.on_drag_release(-49.0, start));
        assert!(!s.on_drag_release(-50.0, start));
        assert_eq!(s.activation_target(), 0.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_frames_respect_activation_invariants() {
        let start = Instant::now();
        let mut s = screen();
        s.on_scroll(-60.0);
        s.on_drag_release(-60.0, start);
        s.on_cancel(start + ms(150));
        s.on_search_tap(start + ms(250));

        for frame in run_frames(&mut s, start, ms(900)) {
            let p = frame.activation.progress;
            assert!((0.0..=1.0).contains(&p), "progress {} out of range", p);
            assert_eq!(frame.activation.is_search_active, p == 1.0);
            assert_eq!(frame.activation.show_scale_max, p > 0.0 && p < 1.0 && frame.scroll_y < 0.0);
        }
        assert_eq!(s.activation_progress(), 1.0);
    }

    #[test]
    fn test_scale_max_during_overscroll_activation() {
        let start = Instant::now();
        let mut s = screen();
        s.on_scroll(-60.0);
        s.on_drag_release(-60.0, start);

        let frame = s.tick(start + ms(200));
        assert!(frame.activation.show_scale_max);
        assert_eq!(frame.header.search_container.translate_x, 0.0);
        assert!(frame.header.search_container.scale > 1.3);

        // The list springs back; the scroll-driven curve takes over again
        s.on_scroll(0.0);
        let frame = s.tick(start + ms(216));
        assert!(!frame.activation.show_scale_max);
        assert_eq!(frame.header.search_container.scale, 1.0);
    }

    #[test]
    fn test_cancel_mid_transition_heads_to_zero() {
        let start = Instant::now();
        let mut s = screen();
        s.on_search_tap(start);
        s.tick(start + ms(200));
        s.on_query_change("First");

        s.on_cancel(start + ms(200));
        assert_eq!(s.query(), "");
        assert_eq!(s.activation_target(), 0.0);
        assert_eq!(s.visible().len(), 1);

        s.tick(start + ms(600));
        assert_eq!(s.activation_progress(), 0.0);
    }

    #[test]
    fn test_cancel_when_idle_still_resets() {
        let start = Instant::now();
        let mut s = screen();
        s.on_query_change("xyz");
        s.on_cancel(start);
        assert_eq!(s.query(), "");
        assert_eq!(s.activation_target(), 0.0);
        assert!(s.bounces_enabled());
    }

    #[test]
    fn test_query_filters_and_restores() {
        let mut s = screen();
        s.on_query_change("First");
        assert_eq!(s.visible().len(), 1);

        s.on_query_change("xyz");
        assert!(s.visible().is_empty());
        assert!(s.tick(Instant::now()).empty_state.is_some());

        s.on_query_change("");
        assert_eq!(s.visible(), s.source().all());
        assert!(s.tick(Instant::now()).empty_state.is_none());
    }

    #[test]
    fn test_bounces_follow_query() {
        let mut s = screen();
        assert!(s.bounces_enabled());
        s.on_query_change("F");
        assert!(!s.bounces_enabled());
        s.on_query_change("");
        assert!(s.bounces_enabled());
    }

    #[test]
    fn test_focus_intents_once_per_edge() {
        let start = Instant::now();
        let mut s = screen();
        let mut input = Input::default();

        s.on_search_tap(start);
        for frame in 0..40 {
            s.tick(start + ms(frame * 16));
            s.apply_focus_intents(Some(&mut input));
        }
        assert!(input.focused);
        assert_eq!(input.calls, 1);

        s.on_cancel(start + ms(700));
        for frame in 0..40 {
            s.tick(start + ms(700 + frame * 16));
            s.apply_focus_intents(Some(&mut input));
        }
        assert!(!input.focused);
        assert_eq!(input.calls, 2);
    }

    #[test]
    fn test_focus_intents_without_input_are_dropped() {
        let start = Instant::now();
        let mut s = screen();
        s.on_search_tap(start);
        s.tick(start + ms(400));
        assert_eq!(s.apply_focus_intents(None), 1);
        assert_eq!(s.apply_focus_intents(None), 0);
    }

    #[test]
    fn test_empty_state_animates_after_layout() {
        let start = Instant::now();
        let mut s = screen();
        s.on_query_change("xyz");
        s.on_empty_layout(start);

        let style = s.tick(start + ms(200)).empty_state.unwrap();
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_x, 0.0);
    }

    #[test]
    fn test_fab_dodges_keyboard_only_when_empty() {
        let start = Instant::now();
        let mut s = screen();
        s.on_keyboard_change(96.0);
        assert_eq!(s.tick(start).fab.translate_y, 0.0);

        s.on_query_change("xyz");
        s.tick(start);
        assert_eq!(s.tick(start + ms(200)).fab.translate_y, -96.0);

        s.on_query_change("");
        s.tick(start + ms(300));
        assert_eq!(s.tick(start + ms(500)).fab.translate_y, 0.0);
    }
}
