use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result, SdfError};
use crate::normalize::NormalizeMethod;
use crate::shape::{ShapeKind, ShapeParams};

/// Parameters for one dataset generation run.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides:
///
/// ```toml
/// height = 32
/// width = 32
/// samples_per_class = 4
/// normalization = "sigmoid"
///
/// [shapes]
/// radius = 0.6
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Image height in pixels.
    pub height: usize,
    /// Image width in pixels.
    pub width: usize,
    /// Number of images generated for each shape kind.
    pub samples_per_class: usize,
    /// Shape parameters shared by every sample.
    pub shapes: ShapeParams,
    /// Normalization applied to every image, or `None` for raw distances.
    pub normalization: Option<NormalizeMethod>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            height: 28,
            width: 28,
            samples_per_class: 1,
            shapes: ShapeParams::default(),
            normalization: None,
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure or
    /// the resulting values fail [`GeneratorConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded generator config");
        Self::from_toml_str(&text)
    }

    /// Checks that image dimensions are non-zero, the total number of
    /// dataset cells fits in `usize`, and shape parameters are finite.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ArgumentError::InvalidArgument`] naming the
    /// first offending value.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SdfError::invalid_argument(format!(
                "image size must be non-zero, got {}x{}",
                self.height, self.width
            )));
        }
        let cells = self
            .height
            .checked_mul(self.width)
            .and_then(|pixels| pixels.checked_mul(self.samples_per_class))
            .and_then(|cells| cells.checked_mul(ShapeKind::ALL.len()));
        if cells.is_none() {
            return Err(SdfError::invalid_argument(format!(
                "dataset of {} samples per class at {}x{} overflows usize",
                self.samples_per_class, self.height, self.width
            )));
        }
        let params = [
            ("radius", self.shapes.radius),
            ("size", self.shapes.size),
            ("offset_x", self.shapes.offset_x),
            ("offset_y", self.shapes.offset_y),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(SdfError::invalid_argument(format!(
                    "shape parameter {name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
