//! Diamond price prediction
//!
//! Encodes a submitted set of diamond attributes into the fixed feature
//! order used at training time and prices it with a pre-trained model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod features;
pub mod model;
pub mod predict;

pub use features::{Clarity, Color, Cut};

/// A single submitted set of diamond attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiamondInput {
    /// Carat weight
    pub carat: f64,
    /// Total depth percentage
    pub depth: f64,
    /// Table width as a percentage of the widest point
    pub table: f64,
    /// Length in mm
    pub x: f64,
    /// Width in mm
    pub y: f64,
    /// Depth in mm
    pub z: f64,
    /// Cut grade
    pub cut: Cut,
    /// Color grade
    pub color: Color,
    /// Clarity grade
    pub clarity: Clarity,
}

impl DiamondInput {
    /// Check that every measurement is a finite, non-negative number.
    ///
    /// The input widgets already enforce minimums, but library callers can
    /// bypass them, so the bound is enforced here as well.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("carat", self.carat),
            ("depth", self.depth),
            ("table", self.table),
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DiamondError::InvalidMeasurement { field, value });
            }
        }
        Ok(())
    }
}

/// Predicted price together with the input it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The submitted attributes, echoed back for display
    #[serde(flatten)]
    pub input: DiamondInput,
    /// Predicted price in dollars
    pub price: f64,
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum DiamondError {
    #[error("Failed to load model from {path}: {message}")]
    ModelLoad { path: String, message: String },

    #[error("Unknown {feature} label: {label:?}")]
    UnknownCategory {
        feature: &'static str,
        label: String,
    },

    #[error("Invalid {field}: {value} is not a finite, non-negative number")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DiamondError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelSettings,
}

/// Where the serialized model lives and how to address it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Path to the ONNX artifact
    pub path: String,
    /// Graph input name, if the exporter did not use its default
    pub input_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: ModelSettings {
                path: "model/diamond.onnx".to_string(),
                input_name: None,
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DiamondError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| DiamondError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DiamondError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> DiamondInput {
        DiamondInput {
            carat: 1.0,
            depth: 61.5,
            table: 55.0,
            x: 6.3,
            y: 6.2,
            z: 3.9,
            cut: Cut::Ideal,
            color: Color::E,
            clarity: Clarity::VS1,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_input() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_measurement() {
        let mut input = sample_input();
        input.carat = -0.5;
        match input.validate() {
            Err(DiamondError::InvalidMeasurement { field, value }) => {
                assert_eq!(field, "carat");
                assert_eq!(value, -0.5);
            }
            other => panic!("expected InvalidMeasurement, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_measurement() {
        let mut input = sample_input();
        input.depth = f64::NAN;
        assert!(matches!(
            input.validate(),
            Err(DiamondError::InvalidMeasurement { field: "depth", .. })
        ));

        input.depth = f64::INFINITY;
        assert!(matches!(
            input.validate(),
            Err(DiamondError::InvalidMeasurement { field: "depth", .. })
        ));
    }

    #[test]
    fn test_validate_accepts_zero() {
        let mut input = sample_input();
        input.table = 0.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = PredictionResult {
            input: sample_input(),
            price: 4242.5,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["carat"], 1.0);
        assert_eq!(json["cut"], "Ideal");
        assert_eq!(json["color"], "E");
        assert_eq!(json["price"], 4242.5);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.model.path, "model/diamond.onnx");
        assert!(parsed.model.input_name.is_none());
    }
}
