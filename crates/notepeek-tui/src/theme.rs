use ratatui::style::Color;

/// Runtime theme for the notes screen
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen and header background; faded elements blend toward it
    pub primary: Color,
    /// Status bar and keyboard tray background
    pub surface: Color,
    /// Search container and FAB fill
    pub secondary: Color,
    /// Icons and separators
    pub tertiary: Color,
    /// Note titles and input text
    pub headline: Color,
    /// Descriptions, header title, cancel button, placeholder
    pub subheadline: Color,
    /// Search bar background
    pub input_background: Color,
    /// Unrevealed part of the search circle
    pub circle: Color,
    /// Query match highlight in note titles
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}

impl Theme {
    /// Blend `color` toward the screen background by `opacity` (1 = unchanged)
    ///
    /// Non-RGB colors cannot be blended and switch at half opacity.
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        match (color, self.primary) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let mix = |fg: u8, bg: u8| -> u8 {
                    (bg as f64 + (fg as f64 - bg as f64) * opacity).round() as u8
                };
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ if opacity >= 0.5 => color,
            _ => self.primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme {
            primary: Color::Rgb(0, 0, 0),
            ..Theme::default()
        }
    }

    #[test]
    fn test_fade_endpoints() {
        let t = theme();
        assert_eq!(t.fade(Color::Rgb(200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(t.fade(Color::Rgb(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_fade_midpoint() {
        assert_eq!(theme().fade(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_fade_named_color_switches_at_half() {
        let t = theme();
        assert_eq!(t.fade(Color::Yellow, 0.6), Color::Yellow);
        assert_eq!(t.fade(Color::Yellow, 0.4), t.primary);
    }
}
