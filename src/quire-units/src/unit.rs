use std::f64::consts::PI;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::{BaseUnit, UnknownUnitName};

/// Units a length literal may be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Millipoint,
    Point,
    Pica,
    Inch,
    Centimeter,
    Millimeter,
    /// A CSS reference pixel, 1/96 of an inch.
    Pixel,
}

impl LengthUnit {
    /// Gets the display name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Millipoint => "mpt",
            Self::Point => "pt",
            Self::Pica => "pc",
            Self::Inch => "in",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Pixel => "px",
        }
    }

    /// Gets the number of millipoints in one of this unit.
    pub fn millipoints(self) -> f64 {
        match self {
            Self::Millipoint => 1.0,
            Self::Point => 1000.0,
            Self::Pica => 12000.0,
            Self::Inch => 72000.0,
            Self::Centimeter => 72000.0 / 2.54,
            Self::Millimeter => 7200.0 / 2.54,
            Self::Pixel => 750.0,
        }
    }
}

/// Units a frequency literal may be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
}

impl FrequencyUnit {
    /// Gets the display name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hertz => "Hz",
            Self::Kilohertz => "kHz",
        }
    }

    /// Gets the number of hertz in one of this unit.
    pub fn hertz(self) -> f64 {
        match self {
            Self::Hertz => 1.0,
            Self::Kilohertz => 1000.0,
        }
    }
}

/// Units a time literal may be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Millisecond,
    Second,
}

impl TimeUnit {
    /// Gets the display name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
        }
    }

    /// Gets the number of milliseconds in one of this unit.
    pub fn milliseconds(self) -> f64 {
        match self {
            Self::Millisecond => 1.0,
            Self::Second => 1000.0,
        }
    }
}

/// Units an angle literal may be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degree,
    Grad,
    Radian,
}

impl AngleUnit {
    /// Gets the display name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Degree => "deg",
            Self::Grad => "grad",
            Self::Radian => "rad",
        }
    }

    /// Gets the number of degrees in one of this unit.
    pub fn degrees(self) -> f64 {
        match self {
            Self::Degree => 1.0,
            Self::Grad => 0.9,
            Self::Radian => 180.0 / PI,
        }
    }
}

/// The unit a literal was originally written in.
///
/// Serializes as its display name, e.g. `"pt"` or `"%"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Unit {
    /// No unit; a plain number.
    None,
    /// A percentage.
    Percent,
    /// A multiple of the font size.
    Em,
    Length(LengthUnit),
    Frequency(FrequencyUnit),
    Time(TimeUnit),
    Angle(AngleUnit),
}

static UNITS_BY_NAME: phf::Map<&'static str, Unit> = phf_map! {
    "" => Unit::None,
    "%" => Unit::Percent,
    "em" => Unit::Em,

    "mpt" => Unit::Length(LengthUnit::Millipoint),
    "pt" => Unit::Length(LengthUnit::Point),
    "pc" => Unit::Length(LengthUnit::Pica),
    "in" => Unit::Length(LengthUnit::Inch),
    "cm" => Unit::Length(LengthUnit::Centimeter),
    "mm" => Unit::Length(LengthUnit::Millimeter),
    "px" => Unit::Length(LengthUnit::Pixel),

    "Hz" => Unit::Frequency(FrequencyUnit::Hertz),
    "kHz" => Unit::Frequency(FrequencyUnit::Kilohertz),

    "ms" => Unit::Time(TimeUnit::Millisecond),
    "s" => Unit::Time(TimeUnit::Second),

    "deg" => Unit::Angle(AngleUnit::Degree),
    "grad" => Unit::Angle(AngleUnit::Grad),
    "rad" => Unit::Angle(AngleUnit::Radian),
};

impl Unit {
    /// Looks up a unit by its exact display name.
    pub fn from_name(name: &str) -> Result<Self, UnknownUnitName> {
        UNITS_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| UnknownUnitName(name.to_owned()))
    }

    /// Gets the display name of the unit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Percent => "%",
            Self::Em => "em",
            Self::Length(u) => u.name(),
            Self::Frequency(u) => u.name(),
            Self::Time(u) => u.name(),
            Self::Angle(u) => u.name(),
        }
    }

    /// Gets the [`BaseUnit`] that values in this unit are stored in.
    pub const fn base_unit(self) -> BaseUnit {
        match self {
            Self::None => BaseUnit::Number,
            Self::Percent => BaseUnit::Percentage,
            Self::Em => BaseUnit::Ems,
            Self::Length(_) => BaseUnit::Millipoints,
            Self::Frequency(_) => BaseUnit::Hertz,
            Self::Time(_) => BaseUnit::Millisecs,
            Self::Angle(_) => BaseUnit::Degrees,
        }
    }

    /// Gets the unit power a freshly written literal in this unit has.
    pub const fn power(self) -> i32 {
        if self.base_unit().is_numeric() {
            0
        } else {
            1
        }
    }

    /// Converts a magnitude written in this unit into the canonical
    /// representation of its [`BaseUnit`].
    pub fn to_canonical(self, value: f64) -> f64 {
        match self {
            Self::None | Self::Em => value,
            Self::Percent => value / 100.0,
            Self::Length(u) => value * u.millipoints(),
            Self::Frequency(u) => value * u.hertz(),
            Self::Time(u) => value * u.milliseconds(),
            Self::Angle(u) => value * u.degrees(),
        }
    }
}

impl From<Unit> for &'static str {
    fn from(unit: Unit) -> Self {
        unit.name()
    }
}

impl TryFrom<String> for Unit {
    type Error = UnknownUnitName;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}
