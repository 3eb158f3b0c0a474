//! Piecewise-quadratic RGB approximation of visible wavelengths
//!
//! Each channel is assembled from quadratic segments over wavelength bands
//! in nanometres. Outside every band a channel contributes zero, so the
//! response is black below 400 nm and from 700 nm upward.

use crate::io::configuration::{SPECTRUM_MAX_NM, SPECTRUM_MIN_NM};
use crate::ramp::sample::ColorSample;

// (band start, band end, c0, c1, c2) evaluating c0 + c1*t + c2*t^2 with t
// the position inside the band; the first matching band wins
type Band = (f64, f64, f64, f64, f64);

const RED_BANDS: [Band; 5] = [
    (400.0, 410.0, 0.0, 0.33, -0.20),
    (410.0, 475.0, 0.14, 0.0, -0.13),
    (545.0, 595.0, 0.0, 1.98, -1.0),
    (595.0, 650.0, 0.98, 0.06, -0.40),
    (650.0, 700.0, 0.65, -0.84, 0.20),
];

const GREEN_BANDS: [Band; 3] = [
    (415.0, 475.0, 0.0, 0.0, 0.80),
    (475.0, 590.0, 0.8, 0.76, -0.80),
    (585.0, 639.0, 0.84, -0.84, 0.0),
];

const BLUE_BANDS: [Band; 2] = [
    (400.0, 475.0, 0.0, 2.20, -1.50),
    (475.0, 560.0, 0.7, -1.0, 0.30),
];

fn evaluate(bands: &[Band], wavelength: f64) -> f64 {
    bands
        .iter()
        .find(|(start, end, ..)| wavelength >= *start && wavelength < *end)
        .map_or(0.0, |&(start, end, c0, c1, c2)| {
            let t = (wavelength - start) / (end - start);
            c2.mul_add(t * t, c1.mul_add(t, c0))
        })
}

/// Approximate display color of light at `wavelength` nanometres
pub fn spectral_color(wavelength: f64) -> ColorSample {
    ColorSample::new(
        evaluate(&RED_BANDS, wavelength),
        evaluate(&GREEN_BANDS, wavelength),
        evaluate(&BLUE_BANDS, wavelength),
    )
}

/// `count` colors spanning `[400, 700)` nm in equal wavelength steps
///
/// Entry `i` sits at `400 + 300 * i / count`, so the first entry is the
/// black response at 400 nm.
pub fn visible_spectrum(count: usize) -> Vec<ColorSample> {
    let span = SPECTRUM_MAX_NM - SPECTRUM_MIN_NM;
    (0..count)
        .map(|i| spectral_color(span.mul_add(i as f64 / count as f64, SPECTRUM_MIN_NM)))
        .collect()
}
