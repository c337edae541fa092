use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

use crate::UnknownBaseUnit;

/// The dimensional kind of a numeric value.
///
/// Each kind has a stable power-of-two [code](BaseUnit::code) for
/// callers which exchange base units as plain integers. Group
/// membership is answered by the predicate methods, never by masking
/// those codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUnit {
    /// A plain number.
    Number,
    /// A percentage, stored as a factor (`50%` is `0.5`).
    Percentage,
    /// A multiple of the current font size.
    Ems,
    /// A length in millipoints.
    Millipoints,
    /// A frequency in hertz.
    Hertz,
    /// A time in milliseconds.
    Millisecs,
    /// An angle in degrees.
    Degrees,
}

impl BaseUnit {
    /// All base units in code order.
    pub const ALL: [BaseUnit; 7] = [
        Self::Number,
        Self::Percentage,
        Self::Ems,
        Self::Millipoints,
        Self::Hertz,
        Self::Millisecs,
        Self::Degrees,
    ];

    /// Gets the integer code of this base unit.
    pub const fn code(self) -> u32 {
        match self {
            Self::Number => 1,
            Self::Percentage => 2,
            Self::Ems => 4,
            Self::Millipoints => 8,
            Self::Hertz => 16,
            Self::Millisecs => 32,
            Self::Degrees => 64,
        }
    }

    /// Numbers and the relative lengths; always of unit power zero.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Percentage | Self::Ems)
    }

    /// Lengths relative to a quantity which is not yet known.
    pub const fn is_relative_length(self) -> bool {
        matches!(self, Self::Percentage | Self::Ems)
    }

    /// The named physical units.
    pub const fn is_unit(self) -> bool {
        matches!(
            self,
            Self::Millipoints | Self::Hertz | Self::Millisecs | Self::Degrees
        )
    }

    /// The named physical units that are not lengths.
    pub const fn is_not_length(self) -> bool {
        matches!(self, Self::Hertz | Self::Millisecs | Self::Degrees)
    }

    /// Absolute-valued kinds: a number or a physical unit.
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Number) || self.is_unit()
    }

    /// Everything but a plain number.
    pub const fn is_not_number(self) -> bool {
        self.is_unit() || self.is_relative_length()
    }

    /// Absolute or relative lengths.
    pub const fn is_distance(self) -> bool {
        matches!(self, Self::Millipoints) || self.is_relative_length()
    }

    /// Gets the display name of this base unit for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "numeric",
            Self::Percentage => "percentage",
            Self::Ems => "ems",
            Self::Millipoints => "millipoints",
            Self::Hertz => "Hertz",
            Self::Millisecs => "milliseconds",
            Self::Degrees => "degrees",
        }
    }
}

impl TryFrom<u32> for BaseUnit {
    type Error = UnknownBaseUnit;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.code() == code)
            .ok_or(UnknownBaseUnit(code))
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gets the display name for an integer base unit code.
///
/// Codes which do not name a [`BaseUnit`] produce a marker carrying
/// the raw value instead of failing.
pub fn unit_type_name(code: u32) -> Cow<'static, str> {
    match BaseUnit::try_from(code) {
        Ok(unit) => Cow::Borrowed(unit.name()),
        Err(UnknownBaseUnit(code)) => {
            Cow::Owned(format!("unrecognized base unit type: {code}"))
        }
    }
}
