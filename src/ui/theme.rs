//! Theme system for the greetings application
//! Supports both dark and light modes with a Material-like purple palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Weight used for card names
pub const EXTRA_BOLD_WEIGHT: Weight = Weight::ExtraBold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1e1e1e);
    pub const PRIMARY: Color = color!(0xbb86fc);
    pub const PRIMARY_HOVER: Color = color!(0xcfa8fd);
    pub const ON_PRIMARY: Color = color!(0x000000);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xffffff);
    pub const PRIMARY: Color = color!(0x6200ee);
    pub const PRIMARY_HOVER: Color = color!(0x7c2bf2);
    pub const ON_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Primary brand color (cards, buttons)
pub fn primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PRIMARY
    } else {
        light::PRIMARY
    }
}

fn primary_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PRIMARY_HOVER
    } else {
        light::PRIMARY_HOVER
    }
}

/// Content color on top of `primary`
pub fn on_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::ON_PRIMARY
    } else {
        light::ON_PRIMARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Color with alpha multiplied by `opacity`
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Onboarding surface
pub fn onboarding_surface(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Greeting card - primary background, rounded, elevated
///
/// `opacity` drives the list fade-in.
pub fn greeting_card(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(primary(theme), opacity))),
        text_color: Some(faded(on_primary(theme), opacity)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25 * opacity),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Text Styles
// ============================================================================

/// List header text
pub fn header_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_secondary(theme)),
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button - filled with brand color
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(primary(theme))),
        text_color: on_primary(theme),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(primary_hover(theme))),
            ..base
        },
        _ => base,
    }
}

/// Icon button on a card (circular, transparent until hovered)
pub fn card_icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: on_primary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(faded(on_primary(theme), 0.12))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(faded(on_primary(theme), 0.2))),
            ..base
        },
        _ => base,
    }
}
