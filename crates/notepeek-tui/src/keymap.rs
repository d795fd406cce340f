//! Configurable key bindings in Vim-style notation
//!
//! Accepted notation: single keys (`j`, `/`), uppercase for Shift (`G`),
//! `<C-x>` for Ctrl, `<S-x>` for Shift, named keys (`<Esc>`, `<CR>`, `<Up>`,
//! `<F5>`), and the two-key `gg` sequence.

use std::collections::HashMap;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyModifiers};
use notepeek_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Sequence bound to a double `g` press
const DOUBLE_G: &str = "gg";

/// Key code plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    fn is_plain_g(&self) -> bool {
        *self == Self::simple(KeyCode::Char('g'))
    }
}

impl FromStr for KeyBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_binding(s).ok_or_else(|| format!("unrecognized key '{}'", s))
    }
}

/// Runtime lookup table from keys to actions
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action completed by a second `g`, when `gg` is bound
    double_g: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
            double_g: None,
        };

        for (notation, action) in [
            (&config.quit, Action::Quit),
            (&config.scroll_down, Action::ScrollDown),
            (&config.scroll_up, Action::ScrollUp),
            (&config.search, Action::Search),
            (&config.cancel, Action::Cancel),
            (&config.jump_to_top, Action::JumpToTop),
            (&config.jump_to_bottom, Action::JumpToBottom),
        ] {
            keymap.bind(notation, action);
        }

        // Ctrl+C always quits; arrows and Esc stay as fallbacks when free
        keymap
            .bindings
            .insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        for (binding, action) in [
            (KeyBinding::simple(KeyCode::Up), Action::ScrollUp),
            (KeyBinding::simple(KeyCode::Down), Action::ScrollDown),
            (KeyBinding::simple(KeyCode::Esc), Action::Cancel),
        ] {
            keymap.bindings.entry(binding).or_insert(action);
        }

        keymap
    }

    /// Bind one configured key; the first binding of a key wins
    fn bind(&mut self, notation: &str, action: Action) {
        if notation.trim() == DOUBLE_G {
            self.double_g = Some(action);
            return;
        }

        let binding = match notation.parse::<KeyBinding>() {
            Ok(binding) => binding,
            Err(e) => {
                warn!("Invalid key binding for {:?}: {}", action, e);
                return;
            }
        };

        if let Some(existing) = self.bindings.get(&binding) {
            warn!(
                "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                notation, existing, action
            );
            return;
        }
        self.bindings.insert(binding, action);
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Action for a completed "gg" sequence
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.double_g.as_ref()
    }

    /// Whether a plain `g` starts (or completes) the "gg" sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.double_g.is_some() && binding.is_plain_g()
    }
}

/// Parse Vim-style key notation; `None` when unrecognized
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        return match inner.split_once('-') {
            Some(("C" | "c", key)) if !key.is_empty() => named_key(key).map(KeyBinding::ctrl),
            Some(("S" | "s", key)) if !key.is_empty() => named_key(key).map(KeyBinding::shift),
            _ => named_key(inner).map(KeyBinding::simple),
        };
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(KeyBinding::shift(KeyCode::Char(c))),
        (Some(c), None) => Some(KeyBinding::simple(KeyCode::Char(c))),
        _ => None,
    }
}

/// Key name inside `<...>` after any modifier prefix
fn named_key(name: &str) -> Option<KeyCode> {
    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = lower.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            };
        }
    };
    Some(code)
}
