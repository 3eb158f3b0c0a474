//! Color math utilities

/// Gamma transfer functions and channel balancing
pub mod gamma;
/// Visible-spectrum color approximation
pub mod spectral;
