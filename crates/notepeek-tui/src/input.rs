use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    Search,
    Cancel,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Typing goes to the search input while it holds focus
    if app.is_input_mode() {
        return handle_input_mode(key);
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // gg requires double press
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap
                .get_pending_g_action()
                .cloned()
                .unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Handle key events while the search input is focused
fn handle_input_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => Action::InputChar(c),
        _ => Action::None,
    }
}
