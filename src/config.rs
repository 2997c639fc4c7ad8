//! Settings for the cosine-similarity-weighted dot product.

use crate::error::{FeatVisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Added to both magnitudes before dividing
pub const DEFAULT_EPS: f32 = 1e-4;

/// Lower clamp applied to the cosine similarity
pub const DEFAULT_FLOOR: f32 = 0.1;

/// Parameters of [`dot_cossim_with`](crate::objectives::dot_cossim_with).
///
/// A `cossim_pow` of zero reduces the objective to a plain dot product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CossimConfig {
    /// Exponent applied to the floored cosine similarity
    #[serde(default)]
    pub cossim_pow: f32,

    /// Magnitude epsilon
    #[serde(default = "default_eps")]
    pub eps: f32,

    /// Floor for the cosine similarity
    #[serde(default = "default_floor")]
    pub floor: f32,
}

fn default_eps() -> f32 {
    DEFAULT_EPS
}

fn default_floor() -> f32 {
    DEFAULT_FLOOR
}

impl Default for CossimConfig {
    fn default() -> Self {
        CossimConfig {
            cossim_pow: 0.0,
            eps: DEFAULT_EPS,
            floor: DEFAULT_FLOOR,
        }
    }
}

impl CossimConfig {
    /// Default settings with the given exponent
    pub fn with_pow(cossim_pow: f32) -> Self {
        CossimConfig {
            cossim_pow,
            ..Default::default()
        }
    }

    /// Reject negative or non-finite settings.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("cossim_pow", self.cossim_pow)?;
        check_non_negative("eps", self.eps)?;
        check_non_negative("floor", self.floor)?;
        Ok(())
    }

    /// Write the settings as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        let serialized = serde_json::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }

    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = fs::File::open(path)?;
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let config: Self = serde_json::from_str(&buffer)?;
        config.validate()?;
        Ok(config)
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(FeatVisError::invalid_parameter(name, "must be finite"));
    }
    if value < 0.0 {
        return Err(FeatVisError::invalid_parameter(name, "must be non-negative"));
    }
    Ok(())
}
