//! Position-based lookups into an ordered color sequence

use crate::io::error::{RampError, Result, invalid_parameter};
use crate::ramp::sample::ColorSample;

/// Map a position among `length` draws onto an index of a sequence
///
/// Computes `floor(position / length * sequence_len)`.
///
/// # Errors
///
/// Returns an error if `length` is zero, `sequence_len` is zero, or
/// `position` is not a finite value within `[0, length)`
pub fn ramp_index(position: f64, length: usize, sequence_len: usize) -> Result<usize> {
    if length == 0 {
        return Err(invalid_parameter(
            "length",
            &length,
            &"must draw at least one sample",
        ));
    }
    if sequence_len == 0 {
        return Err(invalid_parameter(
            "sequence",
            &sequence_len,
            &"cannot sample an empty sequence",
        ));
    }
    if !position.is_finite() || position < 0.0 || position >= length as f64 {
        return Err(RampError::PositionOutOfRange { position, length });
    }

    let index = (position / length as f64 * sequence_len as f64).floor() as usize;
    // Float rounding can never push a valid position past the last sample
    Ok(index.min(sequence_len - 1))
}

/// Color at `position` out of `length` evenly spaced draws from `sequence`
///
/// # Errors
///
/// Returns an error if the position falls outside `[0, length)` or the
/// sequence is empty
pub fn sample_at(sequence: &[ColorSample], position: f64, length: usize) -> Result<ColorSample> {
    let index = ramp_index(position, length, sequence.len())?;
    sequence
        .get(index)
        .copied()
        .ok_or(RampError::PositionOutOfRange { position, length })
}

/// `count` colors drawn at positions `0..count`
///
/// # Errors
///
/// Returns an error if `count` is zero or the sequence is empty
pub fn evenly_spaced(sequence: &[ColorSample], count: usize) -> Result<Vec<ColorSample>> {
    if count == 0 {
        return Err(invalid_parameter(
            "count",
            &count,
            &"must draw at least one sample",
        ));
    }
    (0..count)
        .map(|position| sample_at(sequence, position as f64, count))
        .collect()
}

/// Indices `(sequence_len / count) * i` for `i in 0..count`
///
/// Integer stride, so the tail of the sequence past the last full stride is
/// never visited.
///
/// # Errors
///
/// Returns an error if `count` is zero or exceeds `sequence_len`
pub fn stride_indices(sequence_len: usize, count: usize) -> Result<Vec<usize>> {
    if count == 0 || count > sequence_len {
        return Err(invalid_parameter(
            "samples",
            &count,
            &format!("must be between 1 and {sequence_len}"),
        ));
    }
    let stride = sequence_len / count;
    Ok((0..count).map(|i| stride * i).collect())
}
