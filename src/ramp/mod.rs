//! Cyclic color ramp generation and sampling

/// Channel walk producing the ramp
pub mod generator;
/// Normalized RGB color type
pub mod sample;
/// Position-based lookups into the ramp
pub mod sampling;

pub use generator::{ColorRamp, RampIter};
pub use sample::ColorSample;
