//! Persisted application settings.

use crate::style::widgets::palette::ThemeMode;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
        }
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ThemeMode;

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "light" => Ok(ThemeMode::Light),
            _ => Ok(ThemeMode::Dark),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_round_trip() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let back: AppSettings = serde_json::from_str(r#"{"theme_mode":"sepia"}"#).unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Dark);
    }
}
