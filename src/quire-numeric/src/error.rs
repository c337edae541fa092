use std::fmt;

use quire_properties::{Categories, PropertyId};
use quire_units::{BaseUnit, Unit, UnknownBaseUnit};
use thiserror::Error;

/// An arithmetic operator, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Mod,
    Multiply,
    Divide,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Mod => "mod",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        })
    }
}

/// Why two operands of an additive operator cannot be combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Incompatibility {
    /// The operands have different unit powers.
    #[error("different unit powers: {0} and {1}")]
    Power(i32, i32),

    /// The operands have different base units.
    #[error("different base units: {0} and {1}")]
    BaseUnit(BaseUnit, BaseUnit),

    /// Relative lengths have no remainder.
    #[error("relative length {0} cannot be an operand")]
    RelativeLength(BaseUnit),

    /// Only plain numbers may be combined with a bare scalar.
    #[error("{0} cannot be combined with a literal number")]
    Scalar(BaseUnit),
}

/// Why a settled value is not acceptable for its property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The unit power does not fit the base unit's category.
    #[error("{base_unit} value with unit power {power}")]
    UnitPower { base_unit: BaseUnit, power: i32 },

    /// The property does not accept values of the category.
    #[error("{category} values are not accepted by property {property} (accepts {legal})")]
    NotAllowed {
        property: PropertyId,
        category: Categories,
        legal: Categories,
    },

    /// The registry has no entry for the property.
    #[error("property {0} is not known to the registry")]
    UnknownProperty(PropertyId),
}

/// Errors produced by [`Numeric`](crate::Numeric) operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A base unit code outside the known kinds.
    #[error(transparent)]
    InvalidUnit(#[from] UnknownBaseUnit),

    /// The original unit of a literal is not a unit of its base unit.
    #[error("'{unit:?}' is not a unit of {base_unit}")]
    UnitMismatch { base_unit: BaseUnit, unit: Unit },

    /// A numeric base unit paired with a non-zero unit power.
    #[error("invalid power for {base_unit}: {power}")]
    InvalidDimension { base_unit: BaseUnit, power: i32 },

    /// The operands of an additive operator do not match.
    #[error("can't {op} numerics: {cause}")]
    IncompatibleOperands { op: Op, cause: Incompatibility },

    /// The operands of a multiplicative operator have no defined
    /// product or quotient.
    #[error("can't {op} {left} by {right}")]
    IncompatibleUnits {
        op: Op,
        left: BaseUnit,
        right: BaseUnit,
    },

    /// A function requiring unit power zero got something else.
    #[error("{function}() requires unit power 0, got {power}")]
    DimensionError { function: &'static str, power: i32 },

    /// The value does not fit its property.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A base unit which has no value category.
    #[error("unrecognized base unit type for validation: {0}")]
    UnrecognizedUnit(BaseUnit),

    /// A property name the registry does not know.
    #[error("unknown property: '{0}'")]
    UnknownProperty(String),
}
