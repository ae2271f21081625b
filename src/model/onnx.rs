//! ONNX-backed price model

use std::path::Path;

use ndarray::{Array2, ArrayD};
use ort::{GraphOptimizationLevel, Session, Value};

use crate::{DiamondError, Result};

/// An immutable predictive model: one price per input row.
///
/// Implementations must be safe to share read-only across threads; the
/// provider hands the same instance to every caller.
pub trait PriceModel: Send + Sync {
    /// Run inference on a batch of feature rows, one predicted price per row
    fn predict_batch(&self, features: &Array2<f32>) -> Result<Vec<f32>>;
}

/// A pre-trained regression model loaded from an ONNX artifact
pub struct OnnxModel {
    session: Session,
    input_name: String,
}

impl OnnxModel {
    /// Load a model from an ONNX file, addressing its first graph input
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_input(path, None)
    }

    /// Load a model from an ONNX file with an explicit graph input name
    pub fn load_with_input<P: AsRef<Path>>(path: P, input_name: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DiamondError::ModelLoad {
                path: path.display().to_string(),
                message: "file not found".to_string(),
            });
        }

        let load_err = |e: ort::Error| DiamondError::ModelLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let session = Session::builder()
            .map_err(load_err)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(load_err)?
            .commit_from_file(path)
            .map_err(load_err)?;

        let input_name = match input_name {
            Some(name) => name.to_string(),
            None => session
                .inputs
                .first()
                .map(|input| input.name.clone())
                .unwrap_or_else(|| "input".to_string()),
        };

        log::debug!(
            "Loaded model from {} (input {:?})",
            path.display(),
            input_name
        );

        Ok(OnnxModel {
            session,
            input_name,
        })
    }
}

impl PriceModel for OnnxModel {
    fn predict_batch(&self, features: &Array2<f32>) -> Result<Vec<f32>> {
        let rows = features.nrows();

        let input = Value::from_array(features.to_owned().into_dyn())
            .map_err(|e| DiamondError::Prediction(e.to_string()))?;

        let inputs = ort::inputs![&self.input_name => input]
            .map_err(|e| DiamondError::Prediction(e.to_string()))?;

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| DiamondError::Prediction(e.to_string()))?;

        // onnxmltools-converted regressors name the output "variable";
        // fall back to the first output for other converters.
        let output = outputs
            .get("variable")
            .or_else(|| outputs.values().next())
            .ok_or_else(|| DiamondError::Prediction("model produced no output".to_string()))?;

        let predicted: ArrayD<f32> = output
            .try_extract_tensor()
            .map_err(|e| DiamondError::Prediction(e.to_string()))?
            .to_owned();

        let prices: Vec<f32> = predicted.iter().copied().collect();
        if prices.len() != rows {
            return Err(DiamondError::Prediction(format!(
                "expected {} prediction(s), model returned {}",
                rows,
                prices.len()
            )));
        }

        Ok(prices)
    }
}
