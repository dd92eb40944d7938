//! Shared theme values for the dashboard dialogs
//!
//! Colors the forms draw with are passed in through `ModalTheme` rather than
//! hardcoded, so the host can load them from its configuration file.

use iced::Color;

/// Default primary (confirm button) color (#3B7DDD)
pub const DEFAULT_PRIMARY: Color = Color::from_rgb(0.231, 0.490, 0.867);

/// Default backdrop opacity
pub const DEFAULT_BACKDROP_OPACITY: f32 = 0.6;

/// Default panel width in pixels
pub const DEFAULT_PANEL_WIDTH: f32 = 480.0;

/// Panel width limits in pixels
pub const MIN_PANEL_WIDTH: f32 = 320.0;
pub const MAX_PANEL_WIDTH: f32 = 800.0;

/// Inline validation message color
pub const ERROR_TEXT: Color = Color::from_rgb(0.9, 0.3, 0.3);

/// Secondary text (subtitles, hints)
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.65);

/// Visual configuration for modal dialogs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalTheme {
    /// Confirm button color
    pub primary: Color,
    /// Backdrop fill behind the panel
    pub backdrop: Color,
    /// Fixed panel width in pixels
    pub panel_width: f32,
}

impl Default for ModalTheme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY,
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, DEFAULT_BACKDROP_OPACITY),
            panel_width: DEFAULT_PANEL_WIDTH,
        }
    }
}

impl ModalTheme {
    /// Build a theme, clamping opacity to 0-1 and width to the panel limits
    pub fn new(primary: Color, backdrop_opacity: f32, panel_width: f32) -> Self {
        Self {
            primary,
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, backdrop_opacity.clamp(0.0, 1.0)),
            panel_width: panel_width.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH),
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3B7DDD"), Some(Color::from_rgb8(0x3B, 0x7D, 0xDD)));
        assert_eq!(parse_hex_color("ff0000"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#+f+f+f"), None);
    }

    #[test]
    fn test_theme_clamps() {
        let theme = ModalTheme::new(Color::WHITE, 1.5, 2000.0);
        assert_eq!(theme.backdrop.a, 1.0);
        assert_eq!(theme.panel_width, MAX_PANEL_WIDTH);

        let theme = ModalTheme::new(Color::WHITE, -1.0, 10.0);
        assert_eq!(theme.backdrop.a, 0.0);
        assert_eq!(theme.panel_width, MIN_PANEL_WIDTH);
    }
}
