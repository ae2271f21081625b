//! Model inference for price predictions

use ndarray::Array2;

use crate::features::DiamondFeatures;
use crate::model::ModelProvider;
use crate::{DiamondError, DiamondInput, PredictionResult, Result};

/// Predictor for pricing submitted diamonds
pub struct Predictor {
    provider: ModelProvider,
}

impl Predictor {
    /// Create a new predictor over a model provider
    pub fn new(provider: ModelProvider) -> Self {
        Predictor { provider }
    }

    /// Price a single submission.
    ///
    /// Validates the measurements, assembles the fixed-order feature
    /// vector, and runs a one-row inference against the cached model.
    /// Synchronous and side-effect free beyond the read-only model call.
    pub fn predict(&self, input: &DiamondInput) -> Result<PredictionResult> {
        input.validate()?;

        let features = DiamondFeatures::from_input(input);
        let batch = Array2::from_shape_vec((1, DiamondFeatures::DIM), features.to_vec())
            .map_err(|e| DiamondError::Prediction(e.to_string()))?;

        let model = self.provider.get()?;
        let prices = model.predict_batch(&batch)?;
        let price = prices
            .first()
            .copied()
            .ok_or_else(|| DiamondError::Prediction("model returned no predictions".to_string()))?;

        log::debug!("Predicted price {:.2} for {:.2} carat", price, input.carat);

        Ok(PredictionResult {
            input: input.clone(),
            price: f64::from(price),
        })
    }

    /// Get the model provider
    pub fn provider(&self) -> &ModelProvider {
        &self.provider
    }
}

/// Format a raw price as currency: thousands separators, two decimals
pub fn format_price(price: f64) -> String {
    let rounded = format!("{:.2}", price.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Negative zero after rounding displays as plain $0.00
    let sign = if price < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Format a prediction for display
pub fn format_prediction(result: &PredictionResult) -> String {
    let input = &result.input;
    format!(
        r#"
┌─────────────────────────────────────────────────┐
│  Diamond price estimate
├─────────────────────────────────────────────────┤
│  Carat:    {:<8}  Cut:      {}
│  Depth:    {:<8}  Color:    {}
│  Table:    {:<8}  Clarity:  {}
│  Size:     {} x {} x {} mm
├─────────────────────────────────────────────────┤
│  Predicted price:  {}
└─────────────────────────────────────────────────┘
"#,
        input.carat,
        input.cut,
        input.depth,
        input.color,
        input.table,
        input.clarity,
        input.x,
        input.y,
        input.z,
        format_price(result.price)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PriceModel, SharedModel};
    use crate::{Clarity, Color, Cut};
    use std::sync::{Arc, Mutex};

    /// Stub model that records every batch it sees and returns a constant
    struct StubModel {
        price: f32,
        seen: Mutex<Vec<Vec<f32>>>,
    }

    impl StubModel {
        fn new(price: f32) -> Arc<Self> {
            Arc::new(StubModel {
                price,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl PriceModel for StubModel {
        fn predict_batch(&self, features: &Array2<f32>) -> Result<Vec<f32>> {
            self.seen
                .lock()
                .unwrap()
                .push(features.iter().copied().collect());
            Ok(vec![self.price; features.nrows()])
        }
    }

    fn reference_input() -> DiamondInput {
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
    fn test_predict_assembles_reference_vector() {
        let stub = StubModel::new(3456.75);
        let predictor = Predictor::new(ModelProvider::preloaded(stub.clone() as SharedModel));

        let result = predictor.predict(&reference_input()).unwrap();

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "exactly one single-row batch");
        assert_eq!(seen[0], vec![1.0, 61.5, 55.0, 6.3, 6.2, 3.9, 4.0, 1.0, 4.0]);
        assert_eq!(result.price, f64::from(3456.75f32));
        assert_eq!(result.input, reference_input());
    }

    #[test]
    fn test_predict_is_deterministic() {
        let stub = StubModel::new(100.0);
        let predictor = Predictor::new(ModelProvider::preloaded(stub.clone() as SharedModel));

        let input = reference_input();
        predictor.predict(&input).unwrap();
        predictor.predict(&input).unwrap();

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen[0], seen[1]);
    }

    #[test]
    fn test_invalid_measurement_skips_model() {
        let stub = StubModel::new(100.0);
        let predictor = Predictor::new(ModelProvider::preloaded(stub.clone() as SharedModel));

        let mut input = reference_input();
        input.z = -3.9;
        assert!(matches!(
            predictor.predict(&input),
            Err(DiamondError::InvalidMeasurement { field: "z", .. })
        ));
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_model_output_is_prediction_error() {
        struct EmptyModel;
        impl PriceModel for EmptyModel {
            fn predict_batch(&self, _features: &Array2<f32>) -> Result<Vec<f32>> {
                Ok(Vec::new())
            }
        }

        let predictor = Predictor::new(ModelProvider::preloaded(Arc::new(EmptyModel)));
        assert!(matches!(
            predictor.predict(&reference_input()),
            Err(DiamondError::Prediction(_))
        ));
    }

    #[test]
    fn test_format_price_reference() {
        assert_eq!(format_price(1234.5), "$1,234.50");
    }

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(999.0), "$999.00");
        assert_eq!(format_price(1000.0), "$1,000.00");
        assert_eq!(format_price(1234567.89), "$1,234,567.89");
    }

    #[test]
    fn test_format_price_rounding_carry() {
        assert_eq!(format_price(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-1234.5), "-$1,234.50");
        assert_eq!(format_price(-0.001), "$0.00");
    }

    #[test]
    fn test_format_prediction_shows_fields_and_price() {
        let result = PredictionResult {
            input: reference_input(),
            price: 1234.5,
        };
        let text = format_prediction(&result);
        assert!(text.contains("$1,234.50"));
        assert!(text.contains("Ideal"));
        assert!(text.contains("VS1"));
        assert!(text.contains("61.5"));
    }
}
