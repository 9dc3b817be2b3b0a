//! Error types for the swirl fluid solver.
//!
//! The solver itself has no recoverable-error surface: every buffer is
//! fixed-size and every index is derived from clamped coordinates. Errors
//! therefore only arise at the edges: building a grid from a bad
//! configuration, or handing the injection API values it cannot use.

use std::error::Error;
use std::fmt;

use crate::channel::ChannelId;

/// Errors detected while validating a grid configuration.
///
/// Returned by `FluidConfig::validate()` and `FluidGrid::new()`; a grid is
/// never constructed from a configuration that fails validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A dimension exceeds [`GridDims::MAX_DIM`](crate::GridDims::MAX_DIM).
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// The bordered cell count does not fit in `usize`.
    CellCountOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Diffusion rate or viscosity is negative or non-finite.
    InvalidRate {
        /// Which rate (`"diffusion"` or `"viscosity"`).
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// Time step is zero, negative, or non-finite.
    InvalidTimeStep {
        /// The invalid value.
        value: f32,
    },
    /// The relaxation solver was configured with zero sweeps.
    ZeroIterations,
    /// No scalar channels were configured.
    NoChannels,
    /// Two channels share the same name.
    DuplicateChannel {
        /// The repeated name.
        name: String,
    },
    /// A channel definition failed validation.
    InvalidChannel {
        /// Name of the offending channel.
        name: String,
        /// Description of the validation failure.
        reason: String,
    },
    /// A colour palette failed validation.
    InvalidPalette {
        /// Description of the validation failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "bordered cell count for {width}x{height} overflows usize")
            }
            Self::InvalidRate { name, value } => {
                write!(f, "{name} must be finite and >= 0, got {value}")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::ZeroIterations => write!(f, "solver iterations must be at least 1"),
            Self::NoChannels => write!(f, "at least one scalar channel is required"),
            Self::DuplicateChannel { name } => {
                write!(f, "channel name '{name}' is used more than once")
            }
            Self::InvalidChannel { name, reason } => {
                write!(f, "invalid channel '{name}': {reason}")
            }
            Self::InvalidPalette { reason } => write!(f, "invalid palette: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from the injection API.
///
/// Out-of-range coordinates are not errors: stamps are clipped to the
/// interior and may simply cover no cells.
#[derive(Clone, Debug, PartialEq)]
pub enum InjectError {
    /// `inject_scalar` received a value count different from the channel count.
    ChannelCountMismatch {
        /// Number of configured channels.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },
    /// The channel id does not name a configured channel.
    UnknownChannel {
        /// The unknown id.
        channel: ChannelId,
    },
    /// An injected amount or velocity component is NaN or infinite.
    NonFinite {
        /// What was being injected.
        what: &'static str,
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelCountMismatch { expected, got } => {
                write!(f, "expected {expected} channel values, got {got}")
            }
            Self::UnknownChannel { channel } => write!(f, "unknown channel {channel}"),
            Self::NonFinite { what, value } => {
                write!(f, "{what} must be finite, got {value}")
            }
        }
    }
}

impl Error for InjectError {}
