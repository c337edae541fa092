use std::fmt;

use quire_properties::{PropertyId, PropertyRegistry};
use quire_units::{angle, AngleUnit, BaseUnit, FrequencyUnit, LengthUnit, TimeUnit, Unit};

use crate::Error;

/// A numeric property value with a base unit raised to a power.
///
/// The magnitude is always held in the canonical unit of the current
/// [`BaseUnit`]: millipoints, hertz, milliseconds or degrees, or a bare
/// factor for numbers, percentages and ems. Plain numbers and relative
/// lengths have unit power zero; freshly written physical quantities
/// have power one.
///
/// Operators mutate the value in place and hand it back for chaining.
/// A failed operator leaves the value untouched. Operands which must
/// survive an operation have to be [cloned](Clone) explicitly.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Numeric {
    pub(crate) value: f64,
    pub(crate) power: i32,
    pub(crate) base_unit: BaseUnit,
    original_base_unit: BaseUnit,
    original_unit: Unit,
    property: PropertyId,
}

impl Numeric {
    /// Creates a fully specified value.
    ///
    /// Fails when `original_unit` is not a unit of `base_unit`, or when
    /// a numeric base unit is given a non-zero `power`.
    pub fn make(
        property: PropertyId,
        value: f64,
        base_unit: BaseUnit,
        power: i32,
        original_unit: Unit,
    ) -> Result<Self, Error> {
        if original_unit.base_unit() != base_unit {
            return Err(Error::UnitMismatch {
                base_unit,
                unit: original_unit,
            });
        }
        if base_unit.is_numeric() && power != 0 {
            return Err(Error::InvalidDimension { base_unit, power });
        }

        Ok(Self::new(property, value, base_unit, power, original_unit))
    }

    /// Creates a value from an integer base unit code.
    ///
    /// See [`BaseUnit::code`] for the encoding.
    pub fn make_raw(
        property: PropertyId,
        value: f64,
        base_unit: u32,
        power: i32,
        original_unit: Unit,
    ) -> Result<Self, Error> {
        let base_unit = BaseUnit::try_from(base_unit)?;
        Self::make(property, value, base_unit, power, original_unit)
    }

    /// Creates a plain number.
    pub fn number(property: PropertyId, value: f64) -> Self {
        Self::new(property, value, BaseUnit::Number, 0, Unit::None)
    }

    /// Creates a plain number from an integer literal.
    pub fn from_integer(property: PropertyId, value: i64) -> Self {
        Self::number(property, value as f64)
    }

    /// Creates a plain number for a property given by name.
    pub fn by_name<R>(registry: &R, property: &str, value: f64) -> Result<Self, Error>
    where
        R: PropertyRegistry + ?Sized,
    {
        registry
            .property_index(property)
            .map(|id| Self::number(id, value))
            .ok_or_else(|| Error::UnknownProperty(property.to_owned()))
    }

    /// Creates a plain number from an integer literal for a property
    /// given by name.
    pub fn integer_by_name<R>(registry: &R, property: &str, value: i64) -> Result<Self, Error>
    where
        R: PropertyRegistry + ?Sized,
    {
        Self::by_name(registry, property, value as f64)
    }

    /// Creates a value from a literal magnitude written in `unit`.
    ///
    /// The magnitude is converted to the canonical representation of
    /// the unit's base unit, e.g. `12pt` is stored as 12000 millipoints
    /// and `50%` as the factor 0.5.
    pub fn from_unit(property: PropertyId, value: f64, unit: Unit) -> Self {
        Self::new(
            property,
            unit.to_canonical(value),
            unit.base_unit(),
            unit.power(),
            unit,
        )
    }

    /// Creates a length.
    pub fn length(property: PropertyId, value: f64, unit: LengthUnit) -> Self {
        Self::from_unit(property, value, Unit::Length(unit))
    }

    /// Creates a frequency.
    pub fn frequency(property: PropertyId, value: f64, unit: FrequencyUnit) -> Self {
        Self::from_unit(property, value, Unit::Frequency(unit))
    }

    /// Creates a time.
    pub fn time(property: PropertyId, value: f64, unit: TimeUnit) -> Self {
        Self::from_unit(property, value, Unit::Time(unit))
    }

    /// Creates an angle.
    pub fn angle(property: PropertyId, value: f64, unit: AngleUnit) -> Self {
        Self::from_unit(property, value, Unit::Angle(unit))
    }

    /// Creates a percentage from its literal value, i.e. `50.0` for 50%.
    pub fn percentage(property: PropertyId, percent: f64) -> Self {
        Self::from_unit(property, percent, Unit::Percent)
    }

    /// Creates a font-relative length.
    pub fn ems(property: PropertyId, value: f64) -> Self {
        Self::from_unit(property, value, Unit::Em)
    }

    fn new(
        property: PropertyId,
        value: f64,
        base_unit: BaseUnit,
        power: i32,
        original_unit: Unit,
    ) -> Self {
        let mut this = Self {
            value,
            power,
            base_unit,
            original_base_unit: base_unit,
            original_unit,
            property,
        };
        this.normalize();

        this
    }

    /// Folds angles back into their canonical range.
    pub(crate) fn normalize(&mut self) {
        if self.base_unit == BaseUnit::Degrees {
            self.value = angle::normalize(self.value);
        }
    }

    /// Gets the magnitude in the canonical unit.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Gets the unit power.
    #[inline]
    pub fn power(&self) -> i32 {
        self.power
    }

    /// Gets the current base unit.
    #[inline]
    pub fn base_unit(&self) -> BaseUnit {
        self.base_unit
    }

    /// Gets the base unit the value was created with.
    #[inline]
    pub fn original_base_unit(&self) -> BaseUnit {
        self.original_base_unit
    }

    /// Gets the unit the value was originally written in.
    #[inline]
    pub fn original_unit(&self) -> Unit {
        self.original_unit
    }

    /// Gets the property the value belongs to.
    #[inline]
    pub fn property(&self) -> PropertyId {
        self.property
    }

    /// Returns the magnitude unchanged.
    ///
    /// No unit checking happens; use [`Numeric::is_number`] and
    /// friends first where the interpretation matters.
    #[inline]
    pub fn as_double(&self) -> f64 {
        self.value
    }

    /// Returns the magnitude truncated towards zero, saturating at the
    /// bounds of [`i64`]. No unit checking happens.
    #[inline]
    pub fn as_long(&self) -> i64 {
        self.value as i64
    }

    /// Returns the magnitude truncated towards zero, saturating at the
    /// bounds of [`i32`]. No unit checking happens.
    #[inline]
    pub fn as_int(&self) -> i32 {
        self.value as i32
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.base_unit.name())?;
        if self.power != 0 {
            write!(f, "^{}", self.power)?;
        }

        Ok(())
    }
}
