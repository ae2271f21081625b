//! Model loading and inference
//!
//! The trained regressor is an opaque artifact produced by another
//! toolchain; it is loaded once per process and shared read-only.

pub mod onnx;
pub mod provider;

pub use onnx::{OnnxModel, PriceModel};
pub use provider::{ModelProvider, SharedModel};
