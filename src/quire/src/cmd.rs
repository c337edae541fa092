pub mod check;

pub mod eval;

pub mod props;

/// A command that can be run from the CLI.
pub trait Command {
    /// Runs the command to completion.
    fn handle(self) -> eyre::Result<()>;
}
