use std::{fs, io, path::PathBuf};

use clap::{ArgAction, Args};
use eyre::Context;
use log::LevelFilter;
use quire_properties::PropertyTable;
use simple_logger::SimpleLogger;

/// Logging verbosity flags shared by all commands.
#[derive(Debug, Args)]
pub struct Verbosity {
    /// Increases log output; repeat for more detail.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disables all log output.
    #[clap(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

impl Verbosity {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Installs the global logger at the requested level.
    pub fn setup(&self) {
        // Only fails when a logger is already installed.
        let _ = SimpleLogger::new().with_level(self.level()).init();
    }
}

/// Selects the property table commands validate against.
#[derive(Debug, Args)]
pub struct Registry {
    /// A JSON property table merged over the built-in properties.
    #[clap(short, long, env = "QUIRE_REGISTRY")]
    pub registry: Option<PathBuf>,
}

impl Registry {
    /// Builds the property table for this invocation.
    pub fn load(&self) -> eyre::Result<PropertyTable> {
        let mut table = PropertyTable::builtin();

        if let Some(path) = &self.registry {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            let extra = PropertyTable::from_reader(io::BufReader::new(file))?;

            log::info!(
                "Merging {} properties from '{}'",
                extra.len(),
                path.display()
            );
            table.merge(extra);
        }

        Ok(table)
    }
}
