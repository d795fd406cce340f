//! Search text input and its soft-keyboard tray

use notepeek_core::FocusTarget;
use tracing::debug;

/// Focus state of the header's search input
///
/// Focusing raises a keyboard tray of `keyboard_height` pixels; blurring
/// dismisses it. The host picks up the change with `take_keyboard_change()`.
#[derive(Debug, Clone)]
pub struct SearchInput {
    focused: bool,
    keyboard_height: f64,
    pending_keyboard: Option<f64>,
}

impl SearchInput {
    pub fn new(keyboard_height: f64) -> Self {
        Self {
            focused: false,
            keyboard_height: keyboard_height.max(0.0),
            pending_keyboard: None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Keyboard height change since the last call, if any
    pub fn take_keyboard_change(&mut self) -> Option<f64> {
        self.pending_keyboard.take()
    }
}

impl FocusTarget for SearchInput {
    fn focus(&mut self) {
        if self.focused {
            return;
        }
        debug!("Search input focused");
        self.focused = true;
        self.pending_keyboard = Some(self.keyboard_height);
    }

    fn blur(&mut self) {
        if !self.focused {
            return;
        }
        debug!("Search input blurred");
        self.focused = false;
        self.pending_keyboard = Some(0.0);
    }
}
