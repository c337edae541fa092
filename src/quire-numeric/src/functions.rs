//! The numeric part of the expression function library.
//!
//! These functions are only defined for absolute values of unit power
//! zero and return bare scalars.

use crate::{Error, Numeric};

impl Numeric {
    fn require_dimensionless(&self, function: &'static str) -> Result<f64, Error> {
        if self.power == 0 {
            Ok(self.value)
        } else {
            Err(Error::DimensionError {
                function,
                power: self.power,
            })
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Result<f64, Error> {
        self.require_dimensionless("abs").map(f64::abs)
    }

    /// The smallest integer not less than the value.
    pub fn ceiling(&self) -> Result<f64, Error> {
        self.require_dimensionless("ceiling").map(f64::ceil)
    }

    /// The largest integer not greater than the value.
    pub fn floor(&self) -> Result<f64, Error> {
        self.require_dimensionless("floor").map(f64::floor)
    }

    /// The closest integer, with halves rounded up (`-2.5` rounds to
    /// `-2`).
    ///
    /// Ties go towards positive infinity, unlike [`f64::round`] which
    /// rounds them away from zero.
    pub fn round(&self) -> Result<i64, Error> {
        self.require_dimensionless("round").map(|v| {
            // `v + 0.5` may itself round up; compare the fraction instead.
            let floor = v.floor();
            let rounded = if v - floor >= 0.5 { floor + 1.0 } else { floor };
            rounded as i64
        })
    }

    /// The greater of two values of unit power zero.
    pub fn max(&self, other: &Numeric) -> Result<f64, Error> {
        self.compare_dimensionless("max", other)
            .map(|(a, b)| a.max(b))
    }

    /// The lesser of two values of unit power zero.
    pub fn min(&self, other: &Numeric) -> Result<f64, Error> {
        self.compare_dimensionless("min", other)
            .map(|(a, b)| a.min(b))
    }

    fn compare_dimensionless(
        &self,
        function: &'static str,
        other: &Numeric,
    ) -> Result<(f64, f64), Error> {
        if self.power == other.power && self.power == 0 {
            return Ok((self.value, other.value));
        }

        let power = if self.power != 0 {
            self.power
        } else {
            other.power
        };
        Err(Error::DimensionError { function, power })
    }
}
