//! Built-in themes and user overrides

mod dracula;
mod gruvbox;
mod midnight;
mod nord;

pub use midnight::default as midnight;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Names accepted by `load_theme`
pub const THEME_NAMES: [&str; 5] = ["midnight", "gruvbox-dark", "gruvbox-light", "nord", "dracula"];

/// Parse "#RRGGBB", "RRGGBB", "#RGB" or "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
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

/// Load a theme by name and apply the configured overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "midnight" => midnight::default(),
        "gruvbox" | "gruvbox-dark" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!("Unknown theme '{}', using midnight", other);
            midnight::default()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color, &str); 9] = [
        (&overrides.bg0, &mut theme.bg0, "bg0"),
        (&overrides.bg1, &mut theme.bg1, "bg1"),
        (&overrides.fg0, &mut theme.fg0, "fg0"),
        (&overrides.fg1, &mut theme.fg1, "fg1"),
        (&overrides.accent, &mut theme.accent, "accent"),
        (&overrides.muted, &mut theme.muted, "muted"),
        (&overrides.border, &mut theme.border, "border"),
        (&overrides.error, &mut theme.error, "error"),
        (&overrides.success, &mut theme.success, "success"),
    ];

    for (hex, slot, name) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Invalid color '{}' for {}, keeping theme color", hex, name),
        }
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8000"), Some(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_hex_color("ff8000"), Some(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_hex_color("#f80"), Some(Color::Rgb(0xff, 0x88, 0x00)));
        assert_eq!(parse_hex_color("#ff80"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_every_name_loads() {
        for name in THEME_NAMES {
            let config = ThemeConfig {
                name: name.to_string(),
                colors: ThemeColorOverrides::default(),
            };
            load_theme(&config);
        }
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let config = ThemeConfig {
            name: "solarized-neon".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        assert_eq!(load_theme(&config), midnight::default());
    }

    #[test]
    fn test_overrides_apply_and_bad_values_ignored() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#123456".to_string()),
                muted: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.muted, nord::default().muted);
    }
}
