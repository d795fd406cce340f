//! Header animator
//!
//! Pure per-frame mapping from the scroll offset and activation progress to
//! the style of every animated header element. All offsets are in
//! device-independent pixels.

use serde::Serialize;

use crate::animation::interpolate;

/// Overscroll past this offset activates search on release
pub const SEARCH_ACTIVATION_THRESHOLD_Y: f64 = -50.0;
/// Overscroll where the search container starts to grow
pub const SEARCH_SCALE_THRESHOLD_Y: f64 = -45.0;
/// Overscroll where the search circle starts to move
const SEARCH_CIRCLE_START_Y: f64 = -10.0;

const MIN_SCALE: f64 = 1.3;
const MAX_SCALE: f64 = 4.0;
const DEFAULT_SCALE: f64 = 1.0;

const MENU_ICON_MAX_TRANSLATE_X: f64 = -100.0;
const TITLE_MAX_TRANSLATE_Y: f64 = 80.0;
const CANCEL_BUTTON_MAX_TRANSLATE: f64 = 50.0;

const ACTIVATION_RANGE: [f64; 2] = [0.0, 1.0];

/// Translation, scale and opacity of one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub fn translated_x(mut self, x: f64) -> Self {
        self.translate_x = x;
        self
    }

    pub fn translated_y(mut self, y: f64) -> Self {
        self.translate_y = y;
        self
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Styles of the animated header elements for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderStyles {
    pub menu_icon: Transform,
    pub title: Transform,
    /// Dark overlay inside the search container, slides up while overscrolling
    pub search_circle: Transform,
    pub search_container: Transform,
    pub search_bar: Transform,
    pub cancel_button: Transform,
}

impl HeaderStyles {
    pub fn compute(scroll_y: f64, progress: f64, show_scale_max: bool) -> Self {
        let search_circle = Transform::IDENTITY.translated_y(interpolate(
            scroll_y,
            &[SEARCH_CIRCLE_START_Y, SEARCH_ACTIVATION_THRESHOLD_Y],
            &[0.0, SEARCH_ACTIVATION_THRESHOLD_Y],
        ));

        // Hard cut between the two curves, chosen once per frame
        let (scale, container_x) = if show_scale_max {
            (
                interpolate(progress, &ACTIVATION_RANGE, &[MIN_SCALE, MAX_SCALE]),
                0.0,
            )
        } else {
            (
                interpolate(
                    scroll_y,
                    &[SEARCH_ACTIVATION_THRESHOLD_Y, SEARCH_SCALE_THRESHOLD_Y, 0.0],
                    &[MIN_SCALE, DEFAULT_SCALE, DEFAULT_SCALE],
                ),
                interpolate(progress, &ACTIVATION_RANGE, &[0.0, CANCEL_BUTTON_MAX_TRANSLATE]),
            )
        };

        let search_container = Transform::IDENTITY
            .scaled(scale)
            .translated_x(container_x)
            .with_opacity(interpolate(progress, &ACTIVATION_RANGE, &[1.0, 0.0]));

        let menu_icon = Transform::IDENTITY.translated_x(interpolate(
            progress,
            &ACTIVATION_RANGE,
            &[0.0, MENU_ICON_MAX_TRANSLATE_X],
        ));

        let title = Transform::IDENTITY
            .translated_y(interpolate(progress, &ACTIVATION_RANGE, &[0.0, TITLE_MAX_TRANSLATE_Y]))
            .with_opacity(interpolate(progress, &[0.0, 0.5], &[1.0, 0.0]));

        let search_bar = Transform::IDENTITY.with_opacity(progress.clamp(0.0, 1.0));

        let cancel_button = Transform::IDENTITY
            .translated_y(interpolate(
                progress,
                &ACTIVATION_RANGE,
                &[CANCEL_BUTTON_MAX_TRANSLATE, 0.0],
            ))
            .with_opacity(interpolate(progress, &[0.9, 1.0], &[0.0, 1.0]));

        Self {
            menu_icon,
            title,
            search_circle,
            search_container,
            search_bar,
            cancel_button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_search_circle_clamped_both_sides() {
        for scroll in [-50.0, -51.0, -120.0, -1e6] {
            assert_eq!(HeaderStyles::compute(scroll, 0.0, false).search_circle.translate_y, -50.0);
        }
        for scroll in [-10.0, -5.0, 0.0, 300.0] {
            assert_eq!(HeaderStyles::compute(scroll, 0.0, false).search_circle.translate_y, 0.0);
        }
        assert!(approx(HeaderStyles::compute(-30.0, 0.0, false).search_circle.translate_y, -25.0));
    }

    #[test]
    fn test_idle_scale_grows_with_overscroll() {
        assert_eq!(HeaderStyles::compute(0.0, 0.0, false).search_container.scale, 1.0);
        assert_eq!(HeaderStyles::compute(-45.0, 0.0, false).search_container.scale, 1.0);
        assert!(approx(HeaderStyles::compute(-47.5, 0.0, false).search_container.scale, 1.15));
        assert!(approx(HeaderStyles::compute(-70.0, 0.0, false).search_container.scale, 1.3));
    }

    #[test]
    fn test_scale_max_switches_to_activation_curve() {
        let styles = HeaderStyles::compute(-60.0, 0.5, true);
        assert!(approx(styles.search_container.scale, 2.65));
        assert_eq!(styles.search_container.translate_x, 0.0);

        let styles = HeaderStyles::compute(0.0, 0.5, false);
        assert_eq!(styles.search_container.scale, 1.0);
        assert!(approx(styles.search_container.translate_x, 25.0));
    }

    #[test]
    fn test_title_fades_out_by_half() {
        for i in 0..=10 {
            let progress = 0.5 + i as f64 * 0.05;
            assert_eq!(HeaderStyles::compute(0.0, progress, false).title.opacity, 0.0);
        }
        assert!(approx(HeaderStyles::compute(0.0, 0.25, false).title.opacity, 0.5));
        assert_eq!(HeaderStyles::compute(0.0, 1.0, false).title.translate_y, 80.0);
    }

    #[test]
    fn test_cancel_button_appears_in_final_tenth() {
        for i in 0..90 {
            let progress = i as f64 / 100.0;
            assert_eq!(HeaderStyles::compute(0.0, progress, false).cancel_button.opacity, 0.0);
        }
        let done = HeaderStyles::compute(0.0, 1.0, false).cancel_button;
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.translate_y, 0.0);
        assert_eq!(HeaderStyles::compute(0.0, 0.0, false).cancel_button.translate_y, 50.0);
    }

    #[test]
    fn test_idle_header_is_at_rest() {
        let styles = HeaderStyles::compute(0.0, 0.0, false);
        assert_eq!(styles.menu_icon, Transform::IDENTITY);
        assert_eq!(styles.title, Transform::IDENTITY);
        assert_eq!(styles.search_container, Transform::IDENTITY);
        assert_eq!(styles.search_bar.opacity, 0.0);
    }

    #[test]
    fn test_fully_active_header() {
        let styles = HeaderStyles::compute(0.0, 1.0, false);
        assert_eq!(styles.menu_icon.translate_x, -100.0);
        assert_eq!(styles.search_container.opacity, 0.0);
        assert_eq!(styles.search_container.translate_x, 50.0);
        assert_eq!(styles.search_bar.opacity, 1.0);
    }
}
