//! Theme registry and loader
//!
//! Built-in themes plus per-color hex overrides from the config file.

pub(crate) mod dracula;
pub(crate) mod gruvbox;
pub(crate) mod nord;
pub(crate) mod one_dark;

use notepeek_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        "one-dark" | "onedark" => one_dark::default(),
        other => {
            warn!(
                "Unknown theme '{}', falling back to gruvbox-dark (available: {})",
                other,
                available_themes().join(", ")
            );
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 7] = [
        (&overrides.primary, &mut theme.primary),
        (&overrides.secondary, &mut theme.secondary),
        (&overrides.tertiary, &mut theme.tertiary),
        (&overrides.headline, &mut theme.headline),
        (&overrides.subheadline, &mut theme.subheadline),
        (&overrides.input_background, &mut theme.input_background),
        (&overrides.circle, &mut theme.circle),
    ];

    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Ignoring invalid color override '{}'", hex),
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula", "one-dark"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
    }

    #[test]
    fn test_parse_hex_color_non_ascii() {
        assert_eq!(parse_hex_color("#€"), None);
        assert_eq!(parse_hex_color("é12"), None);
        assert_eq!(parse_hex_color("ff€f"), None);
    }

    #[test]
    fn test_non_ascii_override_falls_back() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                secondary: Some("#€".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.secondary, nord::default().secondary);
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.primary, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in available_themes() {
            let config = ThemeConfig {
                name: name.to_string(),
                ..Default::default()
            };
            // Unknown names fall back to gruvbox; listed ones must not
            let theme = load_theme(&config);
            if name != "gruvbox-dark" {
                assert_ne!(theme.primary, gruvbox::dark().primary, "{} fell back", name);
            }
        }
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                secondary: Some("#ff0000".to_string()),
                circle: Some("not-a-color".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.secondary, Color::Rgb(255, 0, 0)));
        assert_eq!(theme.circle, nord::default().circle);
    }
}
