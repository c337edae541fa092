use clap::Parser;

mod cli;
use cli::Cli;

mod cmd;
use cmd::Command;

mod utils;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    cli.verbosity.setup();
    cli.command.handle()
}
