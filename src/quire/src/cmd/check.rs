use clap::Args;
use quire_numeric::{Numeric, PropertyRegistry};
use quire_units::Unit;

use super::Command;
use crate::cli::Registry;

/// Subcommand for checking a single literal against a property.
#[derive(Debug, Args)]
pub struct Check {
    /// The name of the property the value is for.
    property: String,

    /// The literal magnitude.
    #[clap(allow_negative_numbers = true)]
    value: f64,

    /// The unit the magnitude is written in, e.g. "pt", "%" or "Hz".
    ///
    /// Plain numbers are assumed when omitted.
    #[clap(short, long, value_parser = Unit::from_name)]
    unit: Option<Unit>,

    #[clap(flatten)]
    registry: Registry,
}

impl Command for Check {
    fn handle(self) -> eyre::Result<()> {
        let table = self.registry.load()?;
        let property = table
            .property_index(&self.property)
            .ok_or_else(|| eyre::eyre!("unknown property '{}'", self.property))?;

        let value = Numeric::from_unit(property, self.value, self.unit.unwrap_or(Unit::None));
        log::debug!("Checking {value:?}");

        value.validate(&table)?;
        println!("{value} is a valid value for '{}'", self.property);

        Ok(())
    }
}
