//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        primary: Color::Rgb(0x28, 0x2a, 0x36),          // Background
        surface: Color::Rgb(0x44, 0x47, 0x5a),          // Selection
        secondary: Color::Rgb(0xbd, 0x93, 0xf9),        // Purple
        tertiary: Color::Rgb(0x62, 0x72, 0xa4),         // Comment
        headline: Color::Rgb(0xf8, 0xf8, 0xf2),         // Foreground
        subheadline: Color::Rgb(0x7a, 0x7c, 0x8d),
        input_background: Color::Rgb(0x21, 0x22, 0x2c), // Current Line (darker)
        circle: Color::Rgb(0x1b, 0x1c, 0x24),
        highlight: Color::Rgb(0xf1, 0xfa, 0x8c),        // Yellow
    }
}
