//! Scene snippet generators driven by ramp colors

/// Diagonal aperture row of intersection blocks
pub mod aperture;
/// Ramp and spectrum palettes
pub mod palette;
/// Sphere pyramid objects and bodies
pub mod pyramid;
/// Balanced linear-light color table
pub mod table;
