use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::*;

pub const HYPHEN: &str = "-";

/// The CLI interface for the Quire application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: QuireCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by Quire.
#[derive(Debug, Subcommand)]
pub enum QuireCommand {
    Check(check::Check),
    Eval(eval::Eval),
    Props(props::Props),
}

impl Command for QuireCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Check(check) => check.handle(),
            Self::Eval(eval) => eval.handle(),
            Self::Props(props) => props.handle(),
        }
    }
}
