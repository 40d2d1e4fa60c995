//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_green: Color,
    pub accent_green_soft: Color,
    pub accent_red: Color,

    // State colors
    pub selected: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadow color
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    ///
    /// Blue actions on a pale blue-to-green wash.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.23, 0.51, 0.96), // Action blue
            primary_light: Color::from_rgb(0.38, 0.62, 0.98),
            primary_dark: Color::from_rgb(0.15, 0.39, 0.92),

            surface: Color::WHITE,
            surface_elevated: Color::WHITE,
            background: Color::from_rgb(0.94, 0.97, 0.99),

            text_primary: Color::from_rgb(0.12, 0.16, 0.22),
            text_secondary: Color::from_rgb(0.29, 0.33, 0.39),
            text_muted: Color::from_rgb(0.61, 0.64, 0.69),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.09, 0.64, 0.29),
            accent_green_soft: Color::from_rgb(0.86, 0.99, 0.91),
            accent_red: Color::from_rgb(0.86, 0.15, 0.15),

            selected: Color::from_rgb(0.86, 0.92, 1.0),
            hover: Color::from_rgb(0.95, 0.97, 1.0),

            border_subtle: Color::from_rgb(0.75, 0.86, 0.99), // Blue-tinted input border
            border_medium: Color::from_rgb(0.58, 0.77, 0.99),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.10),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.38, 0.65, 0.98),
            primary_light: Color::from_rgb(0.58, 0.77, 0.99),
            primary_dark: Color::from_rgb(0.23, 0.51, 0.96),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.18),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            accent_green: Color::from_rgb(0.29, 0.87, 0.50),
            accent_green_soft: Color::from_rgb(0.08, 0.24, 0.14),
            accent_red: Color::from_rgb(0.97, 0.44, 0.44),

            selected: Color::from_rgb(0.12, 0.19, 0.29),
            hover: Color::from_rgb(0.14, 0.15, 0.17),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.30),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
