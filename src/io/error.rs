//! Error types for ramp sampling, code emission and swatch export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all ramp operations
#[derive(Debug)]
pub enum RampError {
    /// Sampling position outside `[0, length)`
    ///
    /// The only misuse the ramp itself can observe: the caller asked for a
    /// fractional position that maps past either end of the sequence.
    PositionOutOfRange {
        /// Requested position
        position: f64,
        /// Declared number of samples the caller intends to draw
        length: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an unusable result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered swatch to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing generated text failed
    Emit {
        /// What was being written
        target: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange { position, length } => {
                write!(
                    f,
                    "Sample position {position} is outside the range [0, {length})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Emit { target, source } => {
                write!(f, "Failed to write {target}: {source}")
            }
        }
    }
}

impl std::error::Error for RampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Emit { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for ramp results
pub type Result<T> = std::result::Result<T, RampError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RampError {
    RampError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> RampError {
    RampError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Wraps a write failure with the name of the emitted artefact
pub fn emit_error(target: &'static str) -> impl FnOnce(std::io::Error) -> RampError {
    move |source| RampError::Emit { target, source }
}
