//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Window background.
pub fn background_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Card style - white panel with a soft drop shadow.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::card(),
        ..Default::default()
    }
}

/// Highlighted product name in the header.
pub fn badge_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.accent_green_soft)),
        border: Border {
            radius: radius::SMALL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Read-only results list frame.
pub fn results_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Success toast.
pub fn toast_success_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    toast_style(p.accent_green)
}

/// Error toast.
pub fn toast_error_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();
    toast_style(p.accent_red)
}

fn toast_style(color: iced::Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(iced::Color::WHITE),
        border: Border {
            radius: radius::MEDIUM.into(),
            ..Default::default()
        },
        shadow: shadows::card(),
        ..Default::default()
    }
}
