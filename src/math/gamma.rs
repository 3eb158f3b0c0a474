//! Gamma transfer functions and 8-bit quantization

/// Convert a display-space channel to linear light
pub fn linearize(channel: f64, display_gamma: f64) -> f64 {
    channel.powf(display_gamma)
}

/// Quantize a display-space channel to 8 bits
pub fn to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Gamma-encode a linear channel and quantize it to 8 bits
///
/// Values are clamped to `[0, 1]` first and rounded half up.
pub fn encode_u8(channel: f64, display_gamma: f64) -> u8 {
    channel
        .clamp(0.0, 1.0)
        .powf(display_gamma.recip())
        .mul_add(255.0, 0.5) as u8
}

/// Per-channel sums of a set of linear colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSums {
    /// Total red intensity
    pub red: f64,
    /// Total green intensity
    pub green: f64,
    /// Total blue intensity
    pub blue: f64,
}

impl ChannelSums {
    /// Accumulate `[red, green, blue]` triples
    pub fn accumulate<'a>(colors: impl IntoIterator<Item = &'a [f64; 3]>) -> Self {
        colors.into_iter().fold(
            Self {
                red: 0.0,
                green: 0.0,
                blue: 0.0,
            },
            |acc, [r, g, b]| Self {
                red: acc.red + r,
                green: acc.green + g,
                blue: acc.blue + b,
            },
        )
    }

    /// Factors that scale green and blue totals to match red
    ///
    /// Returns `None` when either the green or blue total is zero.
    pub fn balance_factors(&self) -> Option<(f64, f64)> {
        (self.green > 0.0 && self.blue > 0.0)
            .then(|| (self.red / self.green, self.red / self.blue))
    }
}
