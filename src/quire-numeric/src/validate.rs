use quire_properties::{Categories, PropertyRegistry};
use quire_units::BaseUnit;

use crate::{Error, Numeric, ValidationError};

impl Numeric {
    /// Checks that this value is acceptable as the final value of its
    /// property.
    ///
    /// Numbers and percentages must have unit power zero, physical
    /// quantities unit power one, and the property must accept the
    /// corresponding category. Dimensionless values are checked for
    /// their power first, physical quantities for their category. Ems
    /// factors have no category of their own and must be resolved
    /// against a length first.
    pub fn validate<R>(&self, registry: &R) -> Result<(), Error>
    where
        R: PropertyRegistry + ?Sized,
    {
        let (category, power) = match self.base_unit {
            BaseUnit::Number => (Categories::NUMBER, 0),
            BaseUnit::Percentage => (Categories::PERCENTAGE, 0),
            BaseUnit::Millipoints => (Categories::LENGTH, 1),
            BaseUnit::Hertz => (Categories::FREQUENCY, 1),
            BaseUnit::Millisecs => (Categories::TIME, 1),
            BaseUnit::Degrees => (Categories::ANGLE, 1),
            BaseUnit::Ems => return Err(Error::UnrecognizedUnit(self.base_unit)),
        };

        if self.base_unit.is_numeric() {
            self.check_power(registry, power)?;
            self.check_category(registry, category)
        } else {
            self.check_category(registry, category)?;
            self.check_power(registry, power)
        }
    }

    fn check_power<R>(&self, registry: &R, power: i32) -> Result<(), Error>
    where
        R: PropertyRegistry + ?Sized,
    {
        if self.power != power {
            return Err(self.reject(
                registry,
                ValidationError::UnitPower {
                    base_unit: self.base_unit,
                    power: self.power,
                },
            ));
        }

        Ok(())
    }

    fn check_category<R>(&self, registry: &R, category: Categories) -> Result<(), Error>
    where
        R: PropertyRegistry + ?Sized,
    {
        let property = self.property();
        let legal = registry
            .legal_categories(property)
            .ok_or_else(|| self.reject(registry, ValidationError::UnknownProperty(property)))?;
        if !legal.contains(category) {
            return Err(self.reject(
                registry,
                ValidationError::NotAllowed {
                    property,
                    category,
                    legal,
                },
            ));
        }

        Ok(())
    }

    fn reject<R>(&self, registry: &R, err: ValidationError) -> Error
    where
        R: PropertyRegistry + ?Sized,
    {
        log::debug!(
            "Rejecting {} for property '{}': {err}",
            self,
            registry.property_name(self.property()).unwrap_or("?")
        );
        err.into()
    }

    /// Gets the display name of the current base unit.
    pub fn base_unit_name(&self) -> &'static str {
        self.base_unit.name()
    }

    /// Gets the display name of the base unit the value was created
    /// with.
    pub fn original_base_unit_name(&self) -> &'static str {
        self.original_base_unit().name()
    }

    /// Gets the display name of the unit the value was originally
    /// written in, e.g. `"pt"` or `"%"`. Plain numbers have an empty
    /// name.
    pub fn original_unit_name(&self) -> &'static str {
        self.original_unit().name()
    }
}
