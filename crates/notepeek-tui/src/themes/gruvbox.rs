//! Gruvbox Material dark
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        primary: Color::Rgb(0x28, 0x28, 0x28),          // bg0
        surface: Color::Rgb(0x45, 0x40, 0x3d),          // bg2
        secondary: Color::Rgb(0xd8, 0xa6, 0x57),        // yellow
        tertiary: Color::Rgb(0x7c, 0x6f, 0x64),         // grey0
        headline: Color::Rgb(0xdd, 0xc7, 0xa1),         // fg1
        subheadline: Color::Rgb(0xa8, 0x99, 0x84),      // grey2
        input_background: Color::Rgb(0x32, 0x30, 0x2f), // bg1
        circle: Color::Rgb(0x21, 0x1f, 0x24),
        highlight: Color::Rgb(0x89, 0xb4, 0x82),        // aqua
    }
}
