use std::path::PathBuf;

use clap::Args;
use quire_numeric::{Numeric, PropertyId, PropertyRegistry};
use quire_properties::PropertyTable;
use quire_units::Unit;
use serde::{Deserialize, Serialize};

use super::Command;
use crate::{
    cli::{HYPHEN, Registry},
    utils,
};

/// Subcommand for evaluating a sequence of operations on a value.
///
/// The input is a JSON document like
///
/// ```json
/// {
///   "property": "width",
///   "initial": { "value": 200, "unit": "pt" },
///   "steps": [
///     { "op": "multiply", "operand": { "value": 50, "unit": "%" } },
///     { "op": "negate" }
///   ],
///   "validate": true
/// }
/// ```
#[derive(Debug, Args)]
pub struct Eval {
    /// The program to evaluate; "-" reads from stdin.
    #[clap(default_value = HYPHEN)]
    input: String,

    /// Output file for the result; defaults to stdout.
    #[clap(short)]
    output: Option<PathBuf>,

    #[clap(flatten)]
    registry: Registry,
}

/// A literal operand.
#[derive(Clone, Copy, Debug, Deserialize)]
struct Literal {
    value: f64,
    #[serde(default)]
    unit: Option<Unit>,
}

impl Literal {
    fn build(self, property: PropertyId) -> Numeric {
        Numeric::from_unit(property, self.value, self.unit.unwrap_or(Unit::None))
    }
}

/// A single operation applied to the accumulated value.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Add { operand: Literal },
    Subtract { operand: Literal },
    Mod { operand: Literal },
    Multiply { operand: Literal },
    Divide { operand: Literal },
    ModBy { divisor: f64 },
    MultiplyBy { factor: f64 },
    DivideBy { divisor: f64 },
    Negate,
}

#[derive(Debug, Deserialize)]
struct Program {
    property: String,
    initial: Literal,
    #[serde(default)]
    steps: Vec<Step>,
    #[serde(default)]
    validate: bool,
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    display: String,
    #[serde(flatten)]
    value: &'a Numeric,
}

impl Program {
    fn run(&self, registry: &PropertyTable) -> eyre::Result<Numeric> {
        let property = registry
            .property_index(&self.property)
            .ok_or_else(|| eyre::eyre!("unknown property '{}'", self.property))?;

        let mut acc = self.initial.build(property);
        for (i, step) in self.steps.iter().enumerate() {
            log::debug!("Step {i}: {step:?} on {acc}");

            match *step {
                Step::Add { operand } => acc.add(&operand.build(property))?,
                Step::Subtract { operand } => acc.subtract(&operand.build(property))?,
                Step::Mod { operand } => acc.modulo(&operand.build(property))?,
                Step::Multiply { operand } => acc.multiply(&operand.build(property))?,
                Step::Divide { operand } => acc.divide(&operand.build(property))?,
                Step::ModBy { divisor } => acc.modulo_scalar(divisor)?,
                Step::MultiplyBy { factor } => acc.multiply_scalar(factor),
                Step::DivideBy { divisor } => acc.divide_scalar(divisor),
                Step::Negate => acc.negate(),
            };
        }

        if self.validate {
            acc.validate(registry)?;
        }

        Ok(acc)
    }
}

impl Command for Eval {
    fn handle(self) -> eyre::Result<()> {
        let table = self.registry.load()?;

        let program: Program = serde_json::from_reader(utils::open_input(&self.input)?)?;
        let result = program.run(&table)?;

        let outcome = Outcome {
            display: result.to_string(),
            value: &result,
        };
        utils::serialize_to_output_source(self.output, &outcome)
    }
}

#[cfg(test)]
mod tests {
    use quire_numeric::{BaseUnit, Error};

    use super::*;

    fn run(program: &str) -> eyre::Result<Numeric> {
        let program: Program = serde_json::from_str(program)?;
        program.run(&PropertyTable::builtin())
    }

    #[test]
    fn resolves_percentage_of_length() -> eyre::Result<()> {
        let result = run(r#"{
            "property": "width",
            "initial": { "value": 50, "unit": "%" },
            "steps": [
                { "op": "multiply", "operand": { "value": 200, "unit": "pt" } },
                { "op": "add", "operand": { "value": 1, "unit": "pc" } }
            ],
            "validate": true
        }"#)?;

        assert!(result.is_length());
        assert_eq!(result.value(), 112_000.0);

        Ok(())
    }

    #[test]
    fn scalar_steps() -> eyre::Result<()> {
        let result = run(r#"{
            "property": "column-count",
            "initial": { "value": 17 },
            "steps": [
                { "op": "mod_by", "divisor": 5 },
                { "op": "multiply_by", "factor": 3 },
                { "op": "negate" }
            ]
        }"#)?;

        assert_eq!(result.base_unit(), BaseUnit::Number);
        assert_eq!(result.value(), -6.0);

        Ok(())
    }

    #[test]
    fn surfaces_numeric_errors() {
        let err = run(r#"{
            "property": "azimuth",
            "initial": { "value": 90, "unit": "deg" },
            "steps": [{ "op": "multiply", "operand": { "value": 2, "unit": "Hz" } }]
        }"#)
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn validation_failure() {
        let err = run(r#"{
            "property": "column-count",
            "initial": { "value": 2, "unit": "pt" },
            "validate": true
        }"#)
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Validation(_))
        ));
    }

    #[test]
    fn unknown_property() {
        assert!(run(r#"{ "property": "colour", "initial": { "value": 1 } }"#).is_err());
    }
}
