//! Deterministic cyclic RGB color ramp and the authoring-time generators built on it
//!
//! The ramp walks three 8-bit channel counters from blue through cyan, green,
//! yellow and red. Evenly spaced draws from it give procedurally placed scene
//! objects distinct, legible colors, which the code generators embed as
//! literal values in ray tracer scene snippets.

#![forbid(unsafe_code)]

/// Scene snippet generation from ramp colors
pub mod codegen;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color math: gamma handling and spectral approximation
pub mod math;
/// Ramp generation and sampling
pub mod ramp;

pub use io::error::{RampError, Result};
pub use ramp::{ColorRamp, ColorSample, RampIter};
