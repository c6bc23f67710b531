//! Colors and widget styles for the heart burst and its demo window
//! Supports both dark and light modes

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
}

/// Heart glyph tint
pub const HEART_PINK: Color = color!(0xff1493);

/// Trigger button resting color
pub const ACCENT: Color = color!(0x1e90ff);

/// Trigger button hovered and pressed color
pub const ACCENT_HOVER: Color = color!(0x4169e1);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Heart tint at the given opacity
pub fn heart(opacity: f32) -> Color {
    Color {
        a: opacity.clamp(0.0, 1.0),
        ..HEART_PINK
    }
}

/// Full-window background container
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Trigger button - accent pill that darkens and lifts on hover
pub fn trigger_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_alpha_is_clamped() {
        assert_eq!(heart(1.5).a, 1.0);
        assert_eq!(heart(-0.5).a, 0.0);
        assert_eq!(heart(0.25).r, HEART_PINK.r);
    }

    #[test]
    fn trigger_button_reacts_to_hover_and_press() {
        let theme = Theme::Light;
        let active = trigger_button(&theme, button::Status::Active);
        let hovered = trigger_button(&theme, button::Status::Hovered);
        let pressed = trigger_button(&theme, button::Status::Pressed);

        assert_eq!(active.background, Some(Background::Color(ACCENT)));
        assert_eq!(hovered.background, Some(Background::Color(ACCENT_HOVER)));
        assert_eq!(pressed.background, Some(Background::Color(ACCENT_HOVER)));
        assert_eq!(active.shadow.blur_radius, 0.0);
        assert!(hovered.shadow.blur_radius > 0.0);
    }

    #[test]
    fn palette_follows_theme() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_eq!(background(&Theme::TokyoNight), dark::BACKGROUND);
    }
}
