//! Window width classification and layout selection.

/// Upper bound (exclusive) of the compact bucket, in logical pixels.
const COMPACT_MAX_WIDTH: f32 = 600.0;
/// Upper bound (exclusive) of the medium bucket, in logical pixels.
const MEDIUM_MAX_WIDTH: f32 = 840.0;

/// Width bucket derived from the current window measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Phone-width windows.
    Compact,
    /// Small tablets and split screens.
    Medium,
    /// Tablets and desktops.
    Expanded,
}

impl WidthClass {
    /// Classifies a window width in logical pixels.
    #[must_use]
    pub const fn from_width(width: f32) -> Self {
        if width < COMPACT_MAX_WIDTH {
            Self::Compact
        } else if width < MEDIUM_MAX_WIDTH {
            Self::Medium
        } else {
            Self::Expanded
        }
    }
}

/// Arrangement mode driving both the chrome and the pane router.
///
/// Only the compact bucket gets the stacked phone arrangement; every other
/// width class, including ones this enum has never heard of, falls open to
/// the richer expanded layout. The default covers the frames rendered before
/// the first window measurement arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Single stacked pane above a bottom destination bar.
    Compact,
    /// Side rail beside multi-pane content.
    #[default]
    Expanded,
}

impl From<WidthClass> for LayoutMode {
    fn from(class: WidthClass) -> Self {
        match class {
            WidthClass::Compact => Self::Compact,
            WidthClass::Medium | WidthClass::Expanded => Self::Expanded,
        }
    }
}

impl LayoutMode {
    /// Classifies a window width straight into a layout mode.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        WidthClass::from_width(width).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_class_boundaries() {
        assert_eq!(WidthClass::from_width(0.0), WidthClass::Compact);
        assert_eq!(WidthClass::from_width(599.0), WidthClass::Compact);
        assert_eq!(WidthClass::from_width(600.0), WidthClass::Medium);
        assert_eq!(WidthClass::from_width(839.0), WidthClass::Medium);
        assert_eq!(WidthClass::from_width(840.0), WidthClass::Expanded);
        assert_eq!(WidthClass::from_width(2560.0), WidthClass::Expanded);
    }

    #[test]
    fn test_only_compact_maps_to_compact() {
        assert_eq!(LayoutMode::from(WidthClass::Compact), LayoutMode::Compact);
        assert_eq!(LayoutMode::from(WidthClass::Medium), LayoutMode::Expanded);
        assert_eq!(LayoutMode::from(WidthClass::Expanded), LayoutMode::Expanded);
    }

    #[test]
    fn test_default_fails_open_to_expanded() {
        assert_eq!(LayoutMode::default(), LayoutMode::Expanded);
    }

    #[test]
    fn test_from_width_shortcut() {
        assert_eq!(LayoutMode::from_width(500.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(1280.0), LayoutMode::Expanded);
    }
}
