use std::path::PathBuf;

use clap::Args;

use super::Command;
use crate::{cli::Registry, utils};

/// Subcommand for printing the property table as JSON.
#[derive(Debug, Args)]
pub struct Props {
    #[clap(flatten)]
    registry: Registry,

    /// Output file for the table; defaults to stdout.
    #[clap(short)]
    output: Option<PathBuf>,
}

impl Command for Props {
    fn handle(self) -> eyre::Result<()> {
        let table = self.registry.load()?;
        utils::serialize_to_output_source(self.output, &table)
    }
}
