//! Encoder configuration
//!
//! The field method and the normalization epsilon, with TOML load/save helpers.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::GafError;

/// Default epsilon added to the min-max denominator
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Trigonometric identity used to build the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GafMethod {
    /// Gramian Angular Summation Field: cos(φ_i + φ_j)
    #[default]
    Summation,
    /// Gramian Angular Difference Field: sin(φ_i - φ_j)
    Difference,
}

impl GafMethod {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summation => "summation",
            Self::Difference => "difference",
        }
    }
}

impl fmt::Display for GafMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GafMethod {
    type Err = GafError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summation" | "gasf" => Ok(Self::Summation),
            "difference" | "gadf" => Ok(Self::Difference),
            other => Err(GafError::InvalidConfiguration(format!(
                "Unknown GAF method: '{}'. Must be either 'summation' or 'difference'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for GafMethod {
    type Error = GafError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GafMethod> for String {
    fn from(method: GafMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GafConfig {
    pub method: GafMethod,
    pub epsilon: f64,
}

impl Default for GafConfig {
    fn default() -> Self {
        Self {
            method: GafMethod::Summation,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl GafConfig {
    /// Summation field with the default epsilon
    pub fn gasf() -> Self {
        Self::default()
    }

    /// Difference field with the default epsilon
    pub fn gadf() -> Self {
        Self {
            method: GafMethod::Difference,
            ..Default::default()
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, GafError> {
        toml::from_str(content).map_err(|e| GafError::InvalidConfiguration(e.to_string()))
    }

    /// Serialize configuration to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
