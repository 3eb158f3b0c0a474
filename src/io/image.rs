//! PNG export of horizontal color swatches

use std::path::Path;

use image::RgbImage;
use ndarray::Array3;

use crate::io::configuration::MAX_SWATCH_DIMENSION;
use crate::io::error::{RampError, Result, invalid_parameter};
use crate::ramp::ColorSample;

/// How normalized channels become 8-bit pixel values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelEncoding {
    /// Channels are already display values
    Direct,
    /// Channels are linear light and get gamma-encoded
    Gamma(f64),
}

impl ChannelEncoding {
    fn encode(self, color: &ColorSample) -> [u8; 3] {
        match self {
            Self::Direct => color.to_rgb8(),
            Self::Gamma(display_gamma) => color.to_encoded_rgb8(display_gamma),
        }
    }
}

fn validate_dimension(parameter: &'static str, value: u32) -> Result<()> {
    if value == 0 || value > MAX_SWATCH_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_SWATCH_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Rasterize `colors` left to right into a `height x width x 3` array
///
/// Column `x` shows color `floor(x * colors.len() / width)`; every row is
/// identical.
///
/// # Errors
///
/// Returns an error if `colors` is empty or a dimension is out of range
pub fn render_swatch(
    colors: &[ColorSample],
    width: u32,
    height: u32,
    encoding: ChannelEncoding,
) -> Result<Array3<u8>> {
    validate_dimension("width", width)?;
    validate_dimension("height", height)?;
    if colors.is_empty() {
        return Err(invalid_parameter(
            "colors",
            &0,
            &"swatch needs at least one color",
        ));
    }

    let width = width as usize;
    let columns: Vec<[u8; 3]> = (0..width)
        .map(|x| {
            colors
                .get(x * colors.len() / width)
                .map_or([0, 0, 0], |color| encoding.encode(color))
        })
        .collect();

    Ok(Array3::from_shape_fn(
        (height as usize, width, 3),
        |(_, x, channel)| {
            columns
                .get(x)
                .and_then(|pixel| pixel.get(channel))
                .copied()
                .unwrap_or(0)
        },
    ))
}

/// Render a swatch and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The swatch cannot be rendered (see [`render_swatch`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_swatch_png(
    colors: &[ColorSample],
    width: u32,
    height: u32,
    encoding: ChannelEncoding,
    output_path: &Path,
) -> Result<()> {
    let pixels = render_swatch(colors, width, height, encoding)?;
    let (raw, _) = pixels.into_raw_vec_and_offset();
    let img = RgbImage::from_raw(width, height, raw).ok_or_else(|| RampError::Computation {
        operation: "swatch rasterization",
        reason: "pixel buffer does not match image dimensions".to_string(),
    })?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RampError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| RampError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
