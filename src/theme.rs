//! Theme for termfolio.
//!
//! Semantic palette consumed by the views. Two presets: `midnight`,
//! matching the original site's dark design, and `terminal`, which
//! defers to the terminal's own colors.

use crate::types::Color;

/// Semantic colors the views paint with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Primary brand color (headings, active nav, links).
    pub primary: Color,
    /// Dimmer companion of primary (chips, secondary accents).
    pub primary_dim: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_bright: Color,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub border_focus: Color,
}

/// Dark preset matching the original site (near-black background,
/// blue primary).
pub fn midnight() -> Theme {
    Theme {
        name: "midnight",
        primary: Color::rgb(96, 165, 250),
        primary_dim: Color::rgb(59, 103, 158),
        success: Color::rgb(74, 222, 128),
        error: Color::rgb(248, 113, 113),
        text: Color::rgb(209, 213, 219),
        text_muted: Color::rgb(130, 138, 150),
        text_bright: Color::WHITE,
        background: Color::rgb(12, 14, 18),
        surface: Color::rgb(24, 28, 35),
        border: Color::rgb(55, 62, 72),
        border_focus: Color::rgb(96, 165, 250),
    }
}

/// Preset that respects the terminal's own color scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal",
        primary: Color::Default,
        primary_dim: Color::Default,
        success: Color::Default,
        error: Color::Default,
        text: Color::Default,
        text_muted: Color::Default,
        text_bright: Color::Default,
        background: Color::Default,
        surface: Color::Default,
        border: Color::Default,
        border_focus: Color::Default,
    }
}

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "midnight" => Some(midnight()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!(get_preset("midnight").unwrap().name, "midnight");
        assert_eq!(get_preset("terminal").unwrap().name, "terminal");
        assert!(get_preset("dracula").is_none());
    }

    #[test]
    fn test_midnight_is_dark() {
        let theme = midnight();
        assert_ne!(theme.background, Color::Default);
        assert_ne!(theme.text, theme.background);
    }
}
