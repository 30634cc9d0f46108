//! Error types for the Steiner routing core.
//!
//! Defines the two error kinds the core surfaces (§7 of the specification)
//! plus a stable machine-readable code per variant, in the manner the
//! teacher library exposes `ChutoroErrorCode` alongside its `thiserror`
//! enums.

use thiserror::Error;

use crate::geometry::{Bounds, Point};

/// Stable codes describing [`SteinerError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SteinerErrorCode {
    /// Fewer than two pins were supplied.
    TooFewPins,
    /// The bounding box's lower-left corner is not `<=` its upper-right corner.
    MalformedBounds,
    /// A pin fell outside the declared bounding box.
    PinOutsideBounds,
    /// An internal consistency check failed; indicates a bug in the core.
    InvariantViolation,
}

impl SteinerErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooFewPins => "TOO_FEW_PINS",
            Self::MalformedBounds => "MALFORMED_BOUNDS",
            Self::PinOutsideBounds => "PIN_OUTSIDE_BOUNDS",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}

impl std::fmt::Display for SteinerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced while validating an [`crate::Input`] or running the
/// routing pipeline.
///
/// Every variant falls into one of the two kinds named by the
/// specification: `InputDomain` (the first three variants) or `Invariant`
/// (the last). No variant is retried within the core; all failures
/// propagate to the caller.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SteinerError {
    /// Fewer than two pins were supplied.
    #[error("a net needs at least 2 pins, got {count}")]
    TooFewPins {
        /// The number of pins actually supplied.
        count: usize,
    },
    /// The bounding box's lower-left corner is not `<=` its upper-right corner.
    #[error("bounds lower-left {lb:?} must be <= upper-right {ru:?}")]
    MalformedBounds {
        /// The declared lower-left corner.
        lb: Point,
        /// The declared upper-right corner.
        ru: Point,
    },
    /// A pin fell outside the declared bounding box.
    #[error("pin {pin:?} lies outside bounds {bounds:?}")]
    PinOutsideBounds {
        /// The offending pin.
        pin: Point,
        /// The bounding box it was expected to lie within.
        bounds: Bounds,
    },
    /// An internal consistency check failed; indicates a bug in the core.
    #[error("internal invariant violated: {detail}")]
    InvariantViolation {
        /// Human-readable description of the violated invariant.
        detail: &'static str,
    },
}

impl SteinerError {
    /// Retrieves the stable [`SteinerErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> SteinerErrorCode {
        match self {
            Self::TooFewPins { .. } => SteinerErrorCode::TooFewPins,
            Self::MalformedBounds { .. } => SteinerErrorCode::MalformedBounds,
            Self::PinOutsideBounds { .. } => SteinerErrorCode::PinOutsideBounds,
            Self::InvariantViolation { .. } => SteinerErrorCode::InvariantViolation,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SteinerError>;
