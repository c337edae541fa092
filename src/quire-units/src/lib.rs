//! Base units and unit tables for formatting-object numerics.
//!
//! Every numeric value in a property expression is kept in one of a
//! small, closed set of [`BaseUnit`]s. Lengths are stored in
//! millipoints, frequencies in hertz, times in milliseconds and
//! angles in degrees; numbers, percentages and ems are bare factors.
//!
//! The literal [`Unit`] a value was written in is tracked separately
//! so diagnostics can refer back to what the author typed.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use thiserror::Error;

pub mod angle;

mod base;
pub use base::*;

mod unit;
pub use unit::*;

/// An integer code that does not name exactly one [`BaseUnit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid base unit: {0}")]
pub struct UnknownBaseUnit(pub u32);

/// A display name that is not present in any unit table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown unit name: '{0}'")]
pub struct UnknownUnitName(pub String);
