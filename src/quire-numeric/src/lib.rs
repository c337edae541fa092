//! Dimensioned numeric values for formatting-object property
//! expressions.
//!
//! A [`Numeric`] is a floating-point magnitude paired with a
//! [`BaseUnit`] and the integer power that unit is raised to. It
//! covers plain numbers, relative lengths (percentages and ems) and
//! absolute lengths, frequencies, times and angles.
//!
//! Values are combined in place by a small algebra which tracks the
//! dimension of the result, and are finally checked against the value
//! categories a [`PropertyRegistry`] declares for their property.
//!
//! ```
//! use quire_numeric::{LengthUnit, Numeric, PropertyId};
//!
//! let width = PropertyId(0);
//! let mut length = Numeric::length(width, 200.0, LengthUnit::Point);
//! length.multiply(&Numeric::percentage(width, 50.0))?;
//!
//! assert!(length.is_length());
//! assert_eq!(length.value(), 100_000.0);
//! # Ok::<(), quire_numeric::Error>(())
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use quire_properties as properties;
pub use quire_properties::{Categories, PropertyId, PropertyRegistry};
pub use quire_units as units;
pub use quire_units::{AngleUnit, BaseUnit, FrequencyUnit, LengthUnit, TimeUnit, Unit};

mod algebra;

mod classify;

mod error;
pub use error::*;

mod functions;

mod numeric;
pub use numeric::Numeric;

mod validate;
