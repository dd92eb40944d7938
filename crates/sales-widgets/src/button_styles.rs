//! Button styling for the dashboard dialogs
//!
//! Confirm buttons are filled with the configured primary color; cancel
//! buttons use a light neutral fill.

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

/// Light button background (cancel)
pub const LIGHT_BG: Color = Color::from_rgb(0.93, 0.94, 0.95);

/// Light button text
pub const LIGHT_TEXT: Color = Color::from_rgb(0.2, 0.22, 0.25);

/// Corner radius shared by all dialog buttons
const RADIUS: f32 = 4.0;

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

/// Filled style with a matching border
fn filled_style(background: Color, text_color: Color) -> Style {
    Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Create a flat disabled button style
fn disabled_style() -> Style {
    Style {
        background: Some(Background::Color(Color::from_rgb(0.8, 0.8, 0.8))),
        text_color: Color::from_rgb(0.5, 0.5, 0.5),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Style function for the confirm button of a dialog
///
/// Use with `.style(move |theme, status| primary_style(theme, status, color))`
pub fn primary_style(_theme: &Theme, status: Status, color: Color) -> Style {
    match status {
        Status::Active => filled_style(color, Color::WHITE),
        Status::Hovered => filled_style(lighten(color, 0.08), Color::WHITE),
        Status::Pressed => filled_style(darken(color, 0.15), Color::WHITE),
        Status::Disabled => disabled_style(),
    }
}

/// Style function for the cancel button of a dialog
pub fn light_style(_theme: &Theme, status: Status) -> Style {
    match status {
        Status::Active => filled_style(LIGHT_BG, LIGHT_TEXT),
        Status::Hovered => filled_style(darken(LIGHT_BG, 0.05), LIGHT_TEXT),
        Status::Pressed => filled_style(darken(LIGHT_BG, 0.12), LIGHT_TEXT),
        Status::Disabled => disabled_style(),
    }
}
