//! Arithmetic on [`Numeric`] values.
//!
//! Additive operators demand identical base units and powers.
//! Multiplicative operators follow the dimensional closure rules:
//!
//! | left | right | result |
//! |---|---|---|
//! | number | anything | right's base unit and power |
//! | anything | number | left's base unit and power |
//! | unit¹ⁿ | unit¹ᵐ | unit¹ⁿ⁺ᵐ (or ⁿ⁻ᵐ when dividing) |
//! | length | relative length | length |
//! | relative length | length | length |
//!
//! Every other combination is rejected. A unit whose power cancels to
//! zero becomes a plain number.

use quire_units::BaseUnit;

use crate::{Error, Incompatibility, Numeric, Op};

impl Numeric {
    /// Adds `other` to this value.
    pub fn add(&mut self, other: &Numeric) -> Result<&mut Self, Error> {
        self.check_additive(Op::Add, other)?;

        self.value += other.value;
        self.normalize();
        Ok(self)
    }

    /// Subtracts `other` from this value.
    pub fn subtract(&mut self, other: &Numeric) -> Result<&mut Self, Error> {
        self.check_additive(Op::Subtract, other)?;

        self.value -= other.value;
        self.normalize();
        Ok(self)
    }

    /// Replaces this value with the remainder of a truncating division
    /// by `other`.
    ///
    /// Like the additive operators this requires matching operands;
    /// relative lengths are rejected.
    pub fn modulo(&mut self, other: &Numeric) -> Result<&mut Self, Error> {
        self.check_additive(Op::Mod, other)?;
        if self.base_unit.is_relative_length() {
            return Err(Error::IncompatibleOperands {
                op: Op::Mod,
                cause: Incompatibility::RelativeLength(self.base_unit),
            });
        }

        self.value %= other.value;
        self.normalize();
        Ok(self)
    }

    /// Replaces this value with the remainder of a truncating division
    /// by a literal number.
    ///
    /// Only plain numbers qualify; relative lengths are rejected even
    /// though the divisor has no unit.
    pub fn modulo_scalar(&mut self, divisor: f64) -> Result<&mut Self, Error> {
        if self.power != 0 {
            return Err(Error::IncompatibleOperands {
                op: Op::Mod,
                cause: Incompatibility::Power(self.power, 0),
            });
        }
        if self.base_unit != BaseUnit::Number {
            return Err(Error::IncompatibleOperands {
                op: Op::Mod,
                cause: Incompatibility::Scalar(self.base_unit),
            });
        }

        self.value %= divisor;
        Ok(self)
    }

    /// Multiplies this value by `other`.
    pub fn multiply(&mut self, other: &Numeric) -> Result<&mut Self, Error> {
        let value = self.value * other.value;
        self.apply_multiplicative(Op::Multiply, other, value)
    }

    /// Divides this value by `other`.
    pub fn divide(&mut self, other: &Numeric) -> Result<&mut Self, Error> {
        let value = self.value / other.value;
        self.apply_multiplicative(Op::Divide, other, value)
    }

    /// Scales this value by a literal number.
    pub fn multiply_scalar(&mut self, factor: f64) -> &mut Self {
        self.value *= factor;
        self.normalize();
        self
    }

    /// Divides this value by a literal number.
    pub fn divide_scalar(&mut self, divisor: f64) -> &mut Self {
        self.value /= divisor;
        self.normalize();
        self
    }

    /// Negates this value.
    pub fn negate(&mut self) -> &mut Self {
        self.value = -self.value;
        self.normalize();
        self
    }

    fn check_additive(&self, op: Op, other: &Numeric) -> Result<(), Error> {
        if self.power != other.power {
            return Err(Error::IncompatibleOperands {
                op,
                cause: Incompatibility::Power(self.power, other.power),
            });
        }
        if self.base_unit != other.base_unit {
            return Err(Error::IncompatibleOperands {
                op,
                cause: Incompatibility::BaseUnit(self.base_unit, other.base_unit),
            });
        }

        Ok(())
    }

    fn apply_multiplicative(
        &mut self,
        op: Op,
        other: &Numeric,
        value: f64,
    ) -> Result<&mut Self, Error> {
        let (mut base_unit, power) = self.multiplicative_dimension(op, other)?;

        if base_unit.is_numeric() && power != 0 {
            return Err(Error::InvalidDimension { base_unit, power });
        }
        if power == 0 && !base_unit.is_numeric() {
            log::trace!("{base_unit} cancelled to unit power 0; now a number");
            base_unit = BaseUnit::Number;
        }

        self.value = value;
        self.base_unit = base_unit;
        self.power = power;
        self.normalize();
        Ok(self)
    }

    /// Determines the base unit and power of `self op other` without
    /// touching either operand.
    fn multiplicative_dimension(&self, op: Op, other: &Numeric) -> Result<(BaseUnit, i32), Error> {
        let (left, right) = (self.base_unit, other.base_unit);
        let incompatible = || Error::IncompatibleUnits { op, left, right };

        // Numbers scale anything.
        if left == BaseUnit::Number {
            return Ok((right, other.power));
        }
        if right == BaseUnit::Number {
            return Ok((left, self.power));
        }

        if left.is_unit() {
            if right.is_unit() {
                if left != right {
                    return Err(incompatible());
                }

                let power = match op {
                    Op::Divide => self.power.saturating_sub(other.power),
                    _ => self.power.saturating_add(other.power),
                };
                Ok((left, power))
            } else if left == BaseUnit::Millipoints {
                Ok((left, self.power))
            } else {
                Err(incompatible())
            }
        } else if right == BaseUnit::Millipoints {
            log::trace!("{left} resolved against a length");
            Ok((right, other.power))
        } else {
            Err(incompatible())
        }
    }
}
