//! One Dark theme
//! https://github.com/atom/atom/tree/master/packages/one-dark-syntax

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        primary: Color::Rgb(0x28, 0x2c, 0x34),          // bg
        surface: Color::Rgb(0x3e, 0x44, 0x51),          // bg-highlight
        secondary: Color::Rgb(0x61, 0xaf, 0xef),        // blue
        tertiary: Color::Rgb(0x5c, 0x63, 0x70),         // comment
        headline: Color::Rgb(0xab, 0xb2, 0xbf),         // fg
        subheadline: Color::Rgb(0x7f, 0x84, 0x8e),
        input_background: Color::Rgb(0x21, 0x25, 0x2b), // bg-darker
        circle: Color::Rgb(0x1b, 0x1e, 0x23),
        highlight: Color::Rgb(0xe5, 0xc0, 0x7b),        // yellow
    }
}
