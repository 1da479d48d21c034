//! Game settings and preferences
//!
//! Loaded once at startup from an optional JSON file. Anything missing from
//! the file falls back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings file {path:?} : {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file is not valid JSON : {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("Field {width}x{height} is too small for paddles and obstacle blocks")]
    FieldTooSmall { width: f32, height: f32 },
}

/// Validated play-field size handed to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDims {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldDims {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl FieldDims {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// RNG seed; drawn from the OS when absent
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Screen shake on goals
    pub screen_shake: bool,
    /// Ball trails
    pub trails: bool,
    /// Drifting background stars
    pub starfield: bool,

    // === Audio ===
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            seed: None,

            screen_shake: true,
            trails: true,
            starfield: true,

            muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Check the field can hold both paddles and the obstacle spawn band
    pub fn validate(&self) -> Result<FieldDims, ConfigError> {
        for (name, value) in [("field_width", self.field_width), ("field_height", self.field_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        let (width, height) = (self.field_width, self.field_height);
        let paddles_fit = width > 2.0 * (PADDLE_INSET + PADDLE_WIDTH) && height > PADDLE_HEIGHT;
        let band_fits = 3.0 * width / 4.0 - BLOCK_WIDTH >= width / 4.0
            && height - BLOCK_HEIGHT >= BLOCK_HEIGHT;
        if !paddles_fit || !band_fits {
            return Err(ConfigError::FieldTooSmall { width, height });
        }

        Ok(FieldDims { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let dims = Settings::default().validate().unwrap();
        assert_eq!(dims, FieldDims::default());
        assert_eq!(dims.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "trails": false }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.trails);
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert!(settings.screen_shake);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let settings = Settings {
            field_height: 0.0,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension { name: "field_height", .. }
        ));

        let settings = Settings {
            field_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidDimension { name: "field_width", .. })
        ));
    }

    #[test]
    fn test_rejects_tiny_field() {
        let settings = Settings {
            field_width: 120.0,
            field_height: 150.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::FieldTooSmall { .. })
        ));
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
