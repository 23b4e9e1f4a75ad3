use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

/// Fixed physical and numerical constants for the sizing study.
///
/// Loaded once at startup and read-only afterwards. Values are expressed in
/// the study's nondimensionalized units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Applied load `P`.
    pub load: f64,
    /// Bracket height `H`.
    pub height: f64,
    /// Elastic modulus `E`.
    pub modulus: f64,
    /// Allowable tensile stress for members 1 and 2.
    pub sigma_tension: f64,
    /// Allowable compressive stress for member 3.
    pub sigma_compression: f64,
    /// Lower bound on each cross-sectional area. Must stay strictly
    /// positive: the member stress expressions are singular at zero area.
    pub area_min: f64,
    /// Upper bound on each cross-sectional area.
    pub area_max: f64,
    /// Blend weight on material volume in the weighted objective.
    pub material_weight: f64,
    /// Blend weight on deflection in the weighted objective.
    pub deflection_weight: f64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            load: 20.0,
            height: 1.2,
            modulus: 1.0,
            sigma_tension: 10.0,
            sigma_compression: 8.0,
            area_min: 0.1,
            area_max: 5.0,
            material_weight: 0.5,
            deflection_weight: 0.5,
        }
    }
}

/// Errors from validating or loading a study configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositiveConstant { name: &'static str, value: f64 },

    #[error("area_min must be strictly positive, got {value}")]
    NonPositiveAreaMin { value: f64 },

    #[error("area bounds are inverted: area_min {min} >= area_max {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },

    #[error("objective weights must not both be zero")]
    ZeroWeights,

    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
}

impl StudyConfig {
    /// Checks that the constants describe a solvable study.
    ///
    /// # Errors
    ///
    /// Returns an error if any physical constant is non-positive or
    /// non-finite, if the area bounds are non-positive or inverted, or if
    /// the objective weights are negative or both zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("load", self.load),
            ("height", self.height),
            ("modulus", self.modulus),
            ("sigma_tension", self.sigma_tension),
            ("sigma_compression", self.sigma_compression),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveConstant { name, value });
            }
        }

        if !self.area_min.is_finite() || self.area_min <= 0.0 {
            return Err(ConfigError::NonPositiveAreaMin {
                value: self.area_min,
            });
        }
        if !self.area_max.is_finite() || self.area_min >= self.area_max {
            return Err(ConfigError::InvertedBounds {
                min: self.area_min,
                max: self.area_max,
            });
        }

        for (name, value) in [
            ("material_weight", self.material_weight),
            ("deflection_weight", self.deflection_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }
        if self.material_weight + self.deflection_weight == 0.0 {
            return Err(ConfigError::ZeroWeights);
        }

        Ok(())
    }

    /// Parses a config from TOML text; fields absent from the text keep
    /// their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this config or if
    /// the resulting config fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// The solver bounds applied to each area variable.
    #[must_use]
    pub fn area_bounds(&self) -> (f64, f64) {
        (self.area_min, self.area_max)
    }
}
