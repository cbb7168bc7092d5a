//! Engine settings
//!
//! Stored as JSON. Missing fields take their defaults, unknown fields are ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CYCLE_DURATION_MS, DEFAULT_CIRCLES, PADDING};
use crate::sim::CircleCount;

/// Engine settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Circles per axis (4-6)
    pub circle_count: u8,
    /// Gap between neighbouring circles (pixels)
    pub padding: f64,
    /// Length of one phase cycle (milliseconds)
    pub cycle_duration_ms: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            circle_count: DEFAULT_CIRCLES,
            padding: PADDING,
            cycle_duration_ms: CYCLE_DURATION_MS,
        }
    }
}

impl EngineSettings {
    /// Validated circle count, falling back to the default when out of range
    pub fn circle_count(&self) -> CircleCount {
        CircleCount::try_from(self.circle_count).unwrap_or_else(|err| {
            log::warn!("{err}, using {DEFAULT_CIRCLES}");
            CircleCount::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, or defaults if it is missing or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(err) => log::warn!("Ignoring malformed settings {}: {err}", path.display()),
            },
            Err(err) => log::warn!("Cannot read settings {}: {err}", path.display()),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = EngineSettings::default();
        assert_eq!(s.circle_count, 5);
        assert_eq!(s.padding, 30.0);
        assert_eq!(s.cycle_duration_ms, 15_000.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = EngineSettings::from_json(r#"{ "circle_count": 6, "theme": "dark" }"#).unwrap();
        assert_eq!(s.circle_count, 6);
        assert_eq!(s.padding, PADDING);
        assert_eq!(s.circle_count().get(), 6);
    }

    #[test]
    fn test_out_of_range_count_falls_back() {
        let s = EngineSettings {
            circle_count: 9,
            ..Default::default()
        };
        assert_eq!(s.circle_count(), CircleCount::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(EngineSettings::from_json("{ circle_count: }").is_err());
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!(
            "lissajous_grid_settings_{}.json",
            std::process::id()
        ));
        let s = EngineSettings {
            circle_count: 4,
            padding: 12.5,
            cycle_duration_ms: 3_000.0,
        };
        s.save(&path).unwrap();
        assert_eq!(EngineSettings::load(&path), s);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("lissajous_grid_settings_does_not_exist.json");
        assert_eq!(EngineSettings::load(path), EngineSettings::default());
    }
}
