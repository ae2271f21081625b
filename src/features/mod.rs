//! Feature encoding
//!
//! Converts submitted diamond attributes into model-ready features.

pub mod encoding;
pub mod vector;

pub use encoding::{Clarity, Color, Cut};
pub use vector::DiamondFeatures;
