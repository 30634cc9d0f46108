//! The input record (C12) and its domain validation (§6/§7), grounded on
//! the bounds check in `Net::addPoint` (`examples/original_source/Net.h`) —
//! with inclusive bounds, per the Open Question resolution in DESIGN.md.

use crate::error::{Result, SteinerError};
use crate::geometry::{Bounds, Point};

/// A validated routing request: a bounding box and the pins to span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// The declared bounding box.
    pub bounds: Bounds,
    /// The pins to connect. Always has at least 2 entries once validated.
    pub pins: Vec<Point>,
}

impl Input {
    /// Validates `bounds` and `pins` per §6/§7 and, if they pass, returns
    /// the constructed [`Input`].
    ///
    /// # Errors
    /// - [`SteinerError::MalformedBounds`] if `bounds.lb > bounds.ru` on
    ///   either axis.
    /// - [`SteinerError::TooFewPins`] if fewer than 2 pins are supplied.
    /// - [`SteinerError::PinOutsideBounds`] if any pin lies outside
    ///   `bounds` (the bounds are inclusive on all four sides).
    pub fn new(bounds: Bounds, pins: Vec<Point>) -> Result<Self> {
        if !bounds.is_well_formed() {
            return Err(SteinerError::MalformedBounds {
                lb: bounds.lb,
                ru: bounds.ru,
            });
        }
        if pins.len() < 2 {
            return Err(SteinerError::TooFewPins { count: pins.len() });
        }
        for &pin in &pins {
            if !bounds.contains(pin) {
                return Err(SteinerError::PinOutsideBounds { pin, bounds });
            }
        }
        Ok(Self { bounds, pins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        let bounds = Bounds::new(Point::new(0, 0), Point::new(10, 10));
        let pins = vec![Point::new(0, 0), Point::new(10, 10)];
        assert!(Input::new(bounds, pins).is_ok());
    }

    #[test]
    fn rejects_malformed_bounds() {
        let bounds = Bounds::new(Point::new(10, 0), Point::new(0, 10));
        let pins = vec![Point::new(0, 0), Point::new(5, 5)];
        let err = Input::new(bounds, pins).expect_err("malformed bounds must be rejected");
        assert_eq!(err.code(), crate::error::SteinerErrorCode::MalformedBounds);
    }

    #[test]
    fn rejects_fewer_than_two_pins() {
        let bounds = Bounds::new(Point::new(0, 0), Point::new(10, 10));
        let err = Input::new(bounds, vec![Point::new(0, 0)])
            .expect_err("single pin must be rejected");
        assert_eq!(err.code(), crate::error::SteinerErrorCode::TooFewPins);
    }

    #[test]
    fn rejects_pin_outside_bounds() {
        let bounds = Bounds::new(Point::new(0, 0), Point::new(10, 10));
        let pins = vec![Point::new(0, 0), Point::new(11, 0)];
        let err = Input::new(bounds, pins).expect_err("out-of-bounds pin must be rejected");
        assert_eq!(err.code(), crate::error::SteinerErrorCode::PinOutsideBounds);
    }

    #[test]
    fn accepts_pins_on_the_boundary_inclusive() {
        let bounds = Bounds::new(Point::new(0, 0), Point::new(10, 10));
        let pins = vec![Point::new(0, 10), Point::new(10, 0)];
        assert!(Input::new(bounds, pins).is_ok());
    }
}
