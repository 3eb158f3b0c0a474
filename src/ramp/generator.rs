//! Cyclic RGB ramp walk
//!
//! Three 8-bit channel counters step from pure blue through cyan, green,
//! yellow and red before red fades back down. Each counter moves by at most
//! one unit per sample, so neighbouring samples never jump.

use std::iter::FusedIterator;

use crate::io::configuration::{
    CHANNEL_MAX, RED_STOP_THRESHOLD, REFERENCE_RAMP_LENGTH, START_CHANNELS,
};
use crate::io::error::Result;
use crate::ramp::sample::{ColorSample, validate_min_brightness};
use crate::ramp::sampling;

/// Per-channel step applied on every advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Decrease by one
    Falling,
    /// Keep the current value
    Hold,
    /// Increase by one
    Rising,
}

impl Direction {
    /// Signed step size
    pub const fn delta(self) -> i16 {
        match self {
            Self::Falling => -1,
            Self::Hold => 0,
            Self::Rising => 1,
        }
    }
}

// Saturating rather than wrapping: blue sits at the top while green rises
// and green sits at the top while blue falls
fn step_channel(value: u8, direction: Direction) -> u8 {
    num_traits::clamp(
        i16::from(value) + direction.delta(),
        0,
        i16::from(CHANNEL_MAX),
    ) as u8
}

/// Channel values and directions of the walk at one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampState {
    /// Red, green, blue counters
    pub channels: [u8; 3],
    /// Red, green, blue directions
    pub directions: [Direction; 3],
}

impl Default for RampState {
    fn default() -> Self {
        Self::new()
    }
}

impl RampState {
    /// Pure blue with only the blue channel rising
    pub const fn new() -> Self {
        Self {
            channels: START_CHANNELS,
            directions: [Direction::Hold, Direction::Hold, Direction::Rising],
        }
    }

    /// Normalized color of the current counters
    pub fn sample(&self) -> ColorSample {
        ColorSample::from_channels(self.channels)
    }

    /// Re-evaluate directions from the current counters
    ///
    /// The rules are independent assignments applied in order, so a later
    /// match overrides an earlier one within the same step.
    pub const fn update_directions(&mut self) {
        let [red, green, blue] = self.channels;
        if blue == CHANNEL_MAX {
            self.directions[1] = Direction::Rising;
        }
        if green == CHANNEL_MAX {
            self.directions[2] = Direction::Falling;
        }
        if blue == 0 {
            self.directions[0] = Direction::Rising;
        }
        if red == CHANNEL_MAX {
            self.directions[1] = Direction::Falling;
        }
        if green == 0 && blue == 0 {
            self.directions[0] = Direction::Falling;
        }
    }

    /// Whether red has faded below the threshold with green and blue spent
    pub const fn is_terminal(&self) -> bool {
        let [red, green, blue] = self.channels;
        red < RED_STOP_THRESHOLD && green == 0 && blue == 0
    }

    /// Move every counter one step along its direction
    pub fn advance(&mut self) {
        for (channel, direction) in self.channels.iter_mut().zip(self.directions) {
            *channel = step_channel(*channel, direction);
        }
    }
}

/// Lazy walk over the ramp
///
/// Restartable: every call to [`RampIter::new`] yields the same sequence.
#[derive(Debug, Clone)]
pub struct RampIter {
    state: Option<RampState>,
}

impl Default for RampIter {
    fn default() -> Self {
        Self::new()
    }
}

impl RampIter {
    /// Start a fresh walk
    pub const fn new() -> Self {
        Self {
            state: Some(RampState::new()),
        }
    }
}

impl Iterator for RampIter {
    type Item = ColorSample;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.as_mut()?;
        let sample = state.sample();
        state.update_directions();
        if state.is_terminal() {
            self.state = None;
        } else {
            state.advance();
        }
        Some(sample)
    }
}

impl FusedIterator for RampIter {}

/// Eagerly generated, immutable ramp
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    samples: Vec<ColorSample>,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::generate()
    }
}

impl ColorRamp {
    /// Run the walk to completion
    pub fn generate() -> Self {
        let mut samples = Vec::with_capacity(REFERENCE_RAMP_LENGTH);
        samples.extend(RampIter::new());
        Self { samples }
    }

    /// Number of samples in the ramp
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a generated ramp
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Ordered samples
    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    /// Sample at an exact index
    pub fn get(&self, index: usize) -> Option<ColorSample> {
        self.samples.get(index).copied()
    }

    /// Iterate samples in ramp order
    pub fn iter(&self) -> std::slice::Iter<'_, ColorSample> {
        self.samples.iter()
    }

    /// Color at `position` out of `length` evenly spaced draws
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is not within `[0, length)`
    pub fn sample_at(&self, position: f64, length: usize) -> Result<ColorSample> {
        sampling::sample_at(&self.samples, position, length)
    }

    /// `count` evenly spaced colors, each channel floored at `min_brightness`
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or `min_brightness` is not in `[0, 1]`
    pub fn palette(&self, count: usize, min_brightness: f64) -> Result<Vec<ColorSample>> {
        validate_min_brightness(min_brightness)?;
        Ok(sampling::evenly_spaced(&self.samples, count)?
            .into_iter()
            .map(|color| color.with_min_brightness(min_brightness))
            .collect())
    }
}

impl<'a> IntoIterator for &'a ColorRamp {
    type Item = &'a ColorSample;
    type IntoIter = std::slice::Iter<'a, ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
