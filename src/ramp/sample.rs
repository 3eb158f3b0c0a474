//! Normalized RGB samples produced by the ramp and the spectrum approximation

use crate::io::configuration::CHANNEL_MAX;
use crate::io::error::{Result, invalid_parameter};
use crate::math::gamma;

/// A color with every component in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// Red intensity
    pub red: f64,
    /// Green intensity
    pub green: f64,
    /// Blue intensity
    pub blue: f64,
}

impl ColorSample {
    /// Create a sample from already-normalized components
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Normalize 8-bit channel values by dividing by 255
    pub fn from_channels(channels: [u8; 3]) -> Self {
        let max = f64::from(CHANNEL_MAX);
        Self {
            red: f64::from(channels[0]) / max,
            green: f64::from(channels[1]) / max,
            blue: f64::from(channels[2]) / max,
        }
    }

    /// Components in `[red, green, blue]` order
    pub const fn components(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Raise every channel to at least `floor`
    ///
    /// Keeps colors assigned to scene objects away from near-black.
    pub fn with_min_brightness(self, floor: f64) -> Self {
        Self {
            red: self.red.max(floor),
            green: self.green.max(floor),
            blue: self.blue.max(floor),
        }
    }

    /// Apply a transfer function to each channel
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            red: f(self.red),
            green: f(self.green),
            blue: f(self.blue),
        }
    }

    /// Quantize to 8-bit channels without gamma correction
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.components().map(gamma::to_u8)
    }

    /// Quantize to 8-bit channels after gamma encoding
    pub fn to_encoded_rgb8(&self, display_gamma: f64) -> [u8; 3] {
        self.components()
            .map(|channel| gamma::encode_u8(channel, display_gamma))
    }
}

/// Check that a brightness floor keeps colors inside `[0, 1]`
///
/// # Errors
///
/// Returns an error if `min_brightness` is not in `[0, 1]`
pub fn validate_min_brightness(min_brightness: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&min_brightness) {
        return Err(invalid_parameter(
            "min_brightness",
            &min_brightness,
            &"must lie in [0, 1]",
        ));
    }
    Ok(())
}
