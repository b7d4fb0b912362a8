//! Color palette with light and dark support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette.
    Light,
    /// Dark palette (default).
    #[default]
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
    pub surface_sunken: Color,
    pub background: Color,
    pub background_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_yellow: Color,
    pub accent_red: Color,

    // State colors
    pub selected: Color,
    pub selected_border: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,
    pub border_strong: Color,
}

/// Soft shadow color shared by both palettes.
pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.06);
/// Stronger shadow color shared by both palettes.
pub const SHADOW_MEDIUM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.12);

impl Palette {
    /// Creates the light palette.
    ///
    /// Airy whites with an indigo primary; selection and hover tints stay
    /// close to the surface color so rows read as paper cards.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            // Primary - indigo
            primary: Color::from_rgb(0.30, 0.36, 0.93),
            primary_light: Color::from_rgb(0.47, 0.53, 1.0),
            primary_dark: Color::from_rgb(0.22, 0.27, 0.78),

            // Surfaces - soft whites
            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(1.0, 1.0, 1.0),
            surface_sunken: Color::from_rgb(0.965, 0.97, 0.985),
            background: Color::from_rgb(0.976, 0.98, 0.99),
            background_secondary: Color::from_rgb(0.955, 0.96, 0.975),

            // Text - clear hierarchy
            text_primary: Color::from_rgb(0.09, 0.10, 0.14),
            text_secondary: Color::from_rgb(0.41, 0.45, 0.53),
            text_muted: Color::from_rgb(0.60, 0.63, 0.69),
            text_on_primary: Color::WHITE,

            // Accents
            accent_yellow: Color::from_rgb(0.95, 0.72, 0.05),
            accent_red: Color::from_rgb(0.90, 0.26, 0.32),

            // States - indigo tinted
            selected: Color::from_rgb(0.93, 0.94, 1.0),
            selected_border: Color::from_rgb(0.47, 0.53, 1.0),
            hover: Color::from_rgb(0.965, 0.97, 0.99),

            // Borders
            border_subtle: Color::from_rgb(0.92, 0.93, 0.95),
            border_medium: Color::from_rgb(0.86, 0.88, 0.91),
            border_strong: Color::from_rgb(0.78, 0.81, 0.85),
        }
    }

    /// Creates the dark palette.
    ///
    /// Deep neutral surfaces with a violet primary; borders carry most of
    /// the depth since shadows barely read on dark backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            // Primary - violet
            primary: Color::from_rgb(0.72, 0.66, 1.0),
            primary_light: Color::from_rgb(0.80, 0.75, 1.0),
            primary_dark: Color::from_rgb(0.58, 0.52, 0.88),

            // Surfaces - deep neutrals
            surface: Color::from_rgb(0.13, 0.13, 0.16),
            surface_elevated: Color::from_rgb(0.16, 0.16, 0.20),
            surface_sunken: Color::from_rgb(0.10, 0.10, 0.13),
            background: Color::from_rgb(0.085, 0.09, 0.11),
            background_secondary: Color::from_rgb(0.105, 0.11, 0.135),

            // Text - high contrast
            text_primary: Color::from_rgb(0.92, 0.92, 0.95),
            text_secondary: Color::from_rgb(0.66, 0.67, 0.73),
            text_muted: Color::from_rgb(0.50, 0.52, 0.58),
            text_on_primary: Color::from_rgb(0.10, 0.09, 0.15),

            // Accents
            accent_yellow: Color::from_rgb(1.0, 0.83, 0.25),
            accent_red: Color::from_rgb(1.0, 0.42, 0.45),

            // States - violet tinted
            selected: Color::from_rgb(0.20, 0.19, 0.28),
            selected_border: Color::from_rgb(0.72, 0.66, 1.0),
            hover: Color::from_rgb(0.16, 0.16, 0.20),

            // Borders - carry the depth
            border_subtle: Color::from_rgb(0.21, 0.21, 0.25),
            border_medium: Color::from_rgb(0.29, 0.29, 0.33),
            border_strong: Color::from_rgb(0.40, 0.40, 0.45),
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

/// Current active palette.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
