//! Prediction entry point
//!
//! Encode a submitted input record and price it with the loaded model.

pub mod inference;

pub use inference::{format_prediction, format_price, Predictor};
