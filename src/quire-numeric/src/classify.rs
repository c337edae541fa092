use quire_units::BaseUnit;

use crate::Numeric;

impl Numeric {
    /// A number, percentage or ems factor. Power is always zero.
    pub fn is_numeric(&self) -> bool {
        self.base_unit.is_numeric()
    }

    /// A plain number.
    pub fn is_number(&self) -> bool {
        self.base_unit == BaseUnit::Number
    }

    /// A font-relative factor.
    pub fn is_ems(&self) -> bool {
        self.base_unit == BaseUnit::Ems
    }

    /// A percentage factor.
    pub fn is_percentage(&self) -> bool {
        self.base_unit == BaseUnit::Percentage
    }

    /// A length in millipoints.
    pub fn is_length(&self) -> bool {
        self.base_unit == BaseUnit::Millipoints && self.power == 1
    }

    /// An absolute or relative length, regardless of power.
    pub fn is_distance(&self) -> bool {
        self.base_unit.is_distance()
    }

    /// A time in milliseconds.
    pub fn is_time(&self) -> bool {
        self.base_unit == BaseUnit::Millisecs && self.power == 1
    }

    /// A frequency in hertz.
    pub fn is_frequency(&self) -> bool {
        self.base_unit == BaseUnit::Hertz && self.power == 1
    }

    /// An angle in degrees.
    pub fn is_angle(&self) -> bool {
        self.base_unit == BaseUnit::Degrees && self.power == 1
    }
}
