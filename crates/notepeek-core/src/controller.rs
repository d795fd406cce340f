//! Search activation controller
//!
//! Turns the continuous activation progress and scroll offset into the
//! discrete search state, and hands focus changes from the per-frame
//! evaluation over to the interactive side through a queue so each edge is
//! delivered once.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

/// Focus side effect requested on an activation edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// Search became active: focus the input (shows the keyboard)
    Focus,
    /// Search became inactive: blur the input (dismisses the keyboard)
    Blur,
}

/// Text input surface that can take or release focus
pub trait FocusTarget {
    fn focus(&mut self);
    fn blur(&mut self);
}

/// Apply a single intent; a missing target makes it a no-op
pub fn apply_intent(intent: FocusIntent, target: Option<&mut (dyn FocusTarget + '_)>) {
    let Some(target) = target else {
        debug!(?intent, "No focus target mounted, dropping intent");
        return;
    };
    match intent {
        FocusIntent::Focus => target.focus(),
        FocusIntent::Blur => target.blur(),
    }
}

/// Derived activation state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Activation {
    pub progress: f64,
    pub is_search_active: bool,
    pub show_scale_max: bool,
}

/// `true` exactly when the transition has fully completed
#[inline]
pub fn is_search_active(progress: f64) -> bool {
    progress == 1.0
}

/// Whether the activation-driven scale curve governs the search container
#[inline]
pub fn show_scale_max(progress: f64, scroll_y: f64) -> bool {
    progress > 0.0 && progress < 1.0 && scroll_y < 0.0
}

/// Edge detector over the derived activation state
#[derive(Debug)]
pub struct SearchActivationController {
    was_active: bool,
    intents: mpsc::UnboundedSender<FocusIntent>,
}

impl SearchActivationController {
    /// Create a controller and the receiving end of its intent queue
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FocusIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                was_active: false,
                intents: tx,
            },
            rx,
        )
    }

    /// Whether the last evaluated frame had search active
    pub fn is_active(&self) -> bool {
        self.was_active
    }

    /// Per-frame evaluation: derive the booleans and enqueue focus changes on edges
    pub fn evaluate(&mut self, scroll_y: f64, progress: f64) -> Activation {
        let active = is_search_active(progress);

        if active != self.was_active {
            let intent = if active {
                FocusIntent::Focus
            } else {
                FocusIntent::Blur
            };
            debug!(?intent, progress, "Search activation edge");
            // The receiver lives as long as the owning screen; a closed queue
            // only happens during teardown.
            let _ = self.intents.send(intent);
            self.was_active = active;
        }

        Activation {
            progress,
            is_search_active: active,
            show_scale_max: show_scale_max(progress, scroll_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Input {
        focused: bool,
        focus_calls: u32,
        blur_calls: u32,
    }

    impl FocusTarget for Input {
        fn focus(&mut self) {
            self.focused = true;
            self.focus_calls += 1;
        }

        fn blur(&mut self) {
            self.focused = false;
            self.blur_calls += 1;
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<FocusIntent>) -> Vec<FocusIntent> {
        let mut out = Vec::new();
        while let Ok(intent) = rx.try_recv() {
            out.push(intent);
        }
        out
    }

    #[test]
    fn test_is_search_active_only_at_one() {
        assert!(is_search_active(1.0));
        assert!(!is_search_active(0.999_999));
        assert!(!is_search_active(0.0));
    }

    #[test]
    fn test_show_scale_max_boundaries() {
        assert!(show_scale_max(0.5, -10.0));
        assert!(!show_scale_max(0.0, -10.0));
        assert!(!show_scale_max(1.0, -10.0));
        assert!(!show_scale_max(0.5, 0.0));
        assert!(!show_scale_max(0.5, 12.0));
    }

    #[test]
    fn test_one_intent_per_edge_not_per_frame() {
        let (mut controller, mut rx) = SearchActivationController::new();

        for progress in [0.0, 0.3, 0.7, 1.0, 1.0, 1.0] {
            controller.evaluate(-60.0, progress);
        }
        assert_eq!(drain(&mut rx), vec![FocusIntent::Focus]);

        for progress in [1.0, 0.8, 0.2, 0.0, 0.0] {
            controller.evaluate(0.0, progress);
        }
        assert_eq!(drain(&mut rx), vec![FocusIntent::Blur]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let (mut controller, mut rx) = SearchActivationController::new();
        let first = controller.evaluate(-20.0, 0.4);
        let second = controller.evaluate(-20.0, 0.4);
        assert_eq!(first, second);
        assert!(first.show_scale_max);
        assert!(!first.is_search_active);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_apply_intent_to_target() {
        let mut input = Input::default();
        apply_intent(FocusIntent::Focus, Some(&mut input));
        assert!(input.focused);
        apply_intent(FocusIntent::Blur, Some(&mut input));
        assert!(!input.focused);
        assert_eq!((input.focus_calls, input.blur_calls), (1, 1));
    }

    #[tokio::test]
    async fn test_intents_reach_another_task() {
        let (mut controller, mut rx) = SearchActivationController::new();

        let consumer = tokio::spawn(async move {
            let mut input = Input::default();
            while let Some(intent) = rx.recv().await {
                apply_intent(intent, Some(&mut input));
            }
            input
        });

        for progress in [0.0, 0.5, 1.0, 1.0, 0.5, 0.0] {
            controller.evaluate(0.0, progress);
        }
        drop(controller);

        let input = consumer.await.unwrap();
        assert!(!input.focused);
        assert_eq!((input.focus_calls, input.blur_calls), (1, 1));
    }

    #[test]
    fn test_apply_intent_without_target_is_noop() {
        apply_intent(FocusIntent::Focus, None);
        apply_intent(FocusIntent::Blur, None);
    }
}
