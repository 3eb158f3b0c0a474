//! Gamma-linearized, channel-balanced ramp table emitted as a C++ constant

use std::io::Write;

use crate::io::error::{Result, computation_error, emit_error};
use crate::math::gamma::{ChannelSums, linearize};
use crate::ramp::ColorRamp;
use crate::ramp::sampling::stride_indices;

/// Linear-light ramp subset with green and blue scaled to red's total
#[derive(Debug, Clone, PartialEq)]
pub struct BalancedTable {
    /// Balanced `[red, green, blue]` entries in ramp order
    pub entries: Vec<[f64; 3]>,
    /// Channel totals before balancing
    pub sums: ChannelSums,
}

impl BalancedTable {
    /// Take `samples` strided ramp entries, linearize and balance them
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is zero or exceeds the ramp length, or
    /// if the green or blue total is zero
    pub fn from_ramp(ramp: &ColorRamp, samples: usize, display_gamma: f64) -> Result<Self> {
        let linear: Vec<[f64; 3]> = stride_indices(ramp.len(), samples)?
            .into_iter()
            .filter_map(|index| ramp.get(index))
            .map(|color| color.map(|channel| linearize(channel, display_gamma)).components())
            .collect();

        let sums = ChannelSums::accumulate(&linear);
        let (green_factor, blue_factor) = sums.balance_factors().ok_or_else(|| {
            computation_error(
                "channel balance",
                &format!("green total {} or blue total {} is zero", sums.green, sums.blue),
            )
        })?;

        let entries = linear
            .into_iter()
            .map(|[r, g, b]| [r, g * green_factor, b * blue_factor])
            .collect();
        Ok(Self { entries, sums })
    }

    /// Write the table as a single C++ constant declaration
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails
    pub fn write(&self, out: &mut impl Write) -> Result<()> {
        let emit = emit_error("balanced table");
        let body: String = self
            .entries
            .iter()
            .map(|[r, g, b]| format!("Vec3{{{r:.6}, {g:.6}, {b:.6}}}, "))
            .collect();
        write!(out, "CONSTANT const Vec3 RGB_TABLE[] = {{{body}}};").map_err(emit)
    }
}
