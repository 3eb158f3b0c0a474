//! Color palettes for procedurally generated scene objects

use clap::ValueEnum;

use crate::io::configuration::{SPECTRUM_MAX_NM, SPECTRUM_PALETTE_START_NM};
use crate::io::error::{Result, invalid_parameter};
use crate::math::spectral::spectral_color;
use crate::ramp::sample::validate_min_brightness;
use crate::ramp::{ColorRamp, ColorSample};

/// Where palette colors are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaletteSource {
    /// Evenly spaced positions along the cyclic ramp
    #[default]
    Ramp,
    /// Evenly spaced wavelengths across the visible spectrum
    Spectrum,
}

/// Palette request
#[derive(Debug, Clone, Copy)]
pub struct PaletteSpec {
    /// Color source
    pub source: PaletteSource,
    /// Number of colors
    pub count: usize,
    /// Per-channel floor
    pub min_brightness: f64,
}

impl PaletteSpec {
    /// Validate the request
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or `min_brightness` is not in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"palette needs at least one color",
            ));
        }
        validate_min_brightness(self.min_brightness)
    }

    /// Draw the palette
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation
    pub fn build(&self, ramp: &ColorRamp) -> Result<Vec<ColorSample>> {
        self.validate()?;
        match self.source {
            PaletteSource::Ramp => ramp.palette(self.count, self.min_brightness),
            PaletteSource::Spectrum => Ok((0..self.count)
                .map(|i| {
                    spectral_color(spectrum_wavelength(i, self.count))
                        .with_min_brightness(self.min_brightness)
                })
                .collect()),
        }
    }
}

/// Wavelength of the `index`-th of `count` spectrum palette entries
pub fn spectrum_wavelength(index: usize, count: usize) -> f64 {
    (SPECTRUM_MAX_NM - SPECTRUM_PALETTE_START_NM)
        .mul_add(index as f64 / count as f64, SPECTRUM_PALETTE_START_NM)
}
