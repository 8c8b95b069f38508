//! Simulation settings, loadable from TOML.
//!
//! Every field has a default, so a file only needs the keys it changes:
//!
//! ```toml
//! speed = 9.0
//! wind = [-0.02, 0.0, 0.0]
//!
//! [canvas]
//! width = 600
//! height = 400
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::numerics::types::point::Point3;
use crate::numerics::types::vector::Vector3;

/// Errors that can occur while loading a [`SimulationConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 550,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Launch position.
    pub start: Point3,
    /// Launch direction; normalized before use.
    pub velocity: Vector3,
    /// Launch speed applied to the normalized direction.
    pub speed: f64,
    pub gravity: Vector3,
    pub wind: Vector3,
    /// Trajectory color.
    pub color: Color,
    pub canvas: CanvasConfig,
    /// Upper bound on simulation steps.
    pub max_ticks: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start: Point3::new(0.0, 1.0, 0.0),
            velocity: Vector3::new(1.0, 1.8, 0.0),
            speed: 11.25,
            gravity: Vector3::new(0.0, -0.1, 0.0),
            wind: Vector3::new(-0.01, 0.0, 0.0),
            color: Color::RED,
            canvas: CanvasConfig::default(),
            max_ticks: 10_000,
        }
    }
}

impl SimulationConfig {
    /// Parse a TOML document, filling missing keys with defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded simulation config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.velocity.magnitude_squared() == 0.0 {
            return Err(ConfigError::Invalid("velocity must be non-zero".into()));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
            speed = 9.0
            wind = [-0.02, 0.0, 0.0]

            [canvas]
            width = 600
        "#;
        let config = SimulationConfig::from_toml_str(text).unwrap();
        assert_eq!(config.speed, 9.0);
        assert_eq!(config.wind, Vector3::new(-0.02, 0.0, 0.0));
        assert_eq!(config.canvas, CanvasConfig { width: 600, height: 550 });
        assert_eq!(config.start, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_color_table() {
        let text = r#"
            [color]
            red = 0.0
            green = 0.5
            blue = 1.0
        "#;
        let config = SimulationConfig::from_toml_str(text).unwrap();
        assert_eq!(config.color, Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SimulationConfig::from_toml_str("velocity = [0.0, 0.0, 0.0]"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("[canvas]\nheight = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("speed = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
