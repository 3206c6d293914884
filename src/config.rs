//! Tunables for the resize and snap engines.
//!
//! DESIGN
//! ======
//! Defaults match the constants in [`crate::consts`]. A host can override
//! them three ways: build the structs directly, deserialize them from JSON
//! (missing fields fall back to defaults), or read `FRAMEGEOM_*` environment
//! variables. Every path ends in [`GeometryConfig::validate`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_FRAME_SIZE, ROTATION_EPSILON_DEG, SNAP_THRESHOLD_RATIO};

const ENV_MIN_SIZE: &str = "FRAMEGEOM_MIN_SIZE";
const ENV_SNAP_THRESHOLD_RATIO: &str = "FRAMEGEOM_SNAP_THRESHOLD_RATIO";
const ENV_ROTATION_EPSILON_DEG: &str = "FRAMEGEOM_ROTATION_EPSILON_DEG";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse geometry config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {field} = {value}: {reason}")]
    Invalid { field: &'static str, value: f64, reason: &'static str },
}

// =============================================================================
// CONFIG TYPES
// =============================================================================

/// Resize engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Floor applied to width and height after every resize.
    pub min_size: f64,
    /// Rotations below this magnitude skip anchor realignment.
    pub rotation_epsilon_deg: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self { min_size: MIN_FRAME_SIZE, rotation_epsilon_deg: ROTATION_EPSILON_DEG }
    }
}

/// Snap engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Snap threshold as a fraction of the larger grid spacing.
    pub threshold_ratio: f64,
    /// Rotations above this magnitude disable resize snapping.
    pub rotation_epsilon_deg: f64,
    /// Floor applied to a size recomputed by resize snapping.
    pub min_size: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: SNAP_THRESHOLD_RATIO,
            rotation_epsilon_deg: ROTATION_EPSILON_DEG,
            min_size: MIN_FRAME_SIZE,
        }
    }
}

/// Combined settings for both engines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub resize: ResizeConfig,
    pub snap: SnapConfig,
}

impl GeometryConfig {
    /// Defaults with `FRAMEGEOM_*` environment overrides applied.
    ///
    /// Unset or unparsable variables keep the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let min_size = env_parse(ENV_MIN_SIZE, defaults.resize.min_size);
        let rotation_epsilon_deg = env_parse(ENV_ROTATION_EPSILON_DEG, defaults.resize.rotation_epsilon_deg);
        let threshold_ratio = env_parse(ENV_SNAP_THRESHOLD_RATIO, defaults.snap.threshold_ratio);

        let config = Self {
            resize: ResizeConfig { min_size, rotation_epsilon_deg },
            snap: SnapConfig { threshold_ratio, rotation_epsilon_deg, min_size },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("resize.min_size", self.resize.min_size)?;
        non_negative("resize.rotation_epsilon_deg", self.resize.rotation_epsilon_deg)?;
        non_negative("snap.threshold_ratio", self.snap.threshold_ratio)?;
        non_negative("snap.rotation_epsilon_deg", self.snap.rotation_epsilon_deg)?;
        positive("snap.min_size", self.snap.min_size)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value, reason: "must be finite and greater than zero" })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value, reason: "must be finite and not negative" })
    }
}

fn env_parse(key: &str, default: f64) -> f64 {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring unparsable geometry override");
            default
        }
    }
}
