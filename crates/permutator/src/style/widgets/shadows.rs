//! Shadow presets and rounded corner radii.

use iced::{Color, Shadow, Vector};

use super::palette;

/// Rounded corner radii.
pub mod radius {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 12.0; // Cards
}

pub fn none() -> Shadow {
    Shadow::default()
}

/// Card shadow, read from the active palette.
pub fn card() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 8.0),
        blur_radius: 24.0,
    }
}

/// Colored aura around focused or hovered buttons.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.35),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 10.0,
    }
}
