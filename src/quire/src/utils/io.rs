use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::Path,
    process,
};

use clap::CommandFactory;
use eyre::Context;

use crate::cli::{Cli, HYPHEN};

/// Obtains a buffered reader over the contents of stdin.
///
/// This function will terminate the process and print the running
/// command's help if stdin is connected to a terminal.
pub fn stdin_reader() -> io::BufReader<io::StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    io::BufReader::new(stdin.lock())
}

/// Opens the given input path, or stdin for `-`.
pub fn open_input(path: &str) -> eyre::Result<Box<dyn Read>> {
    if path == HYPHEN {
        return Ok(Box::new(stdin_reader()));
    }

    let file = fs::File::open(Path::new(path))
        .with_context(|| format!("failed to open '{path}'"))?;
    Ok(Box::new(io::BufReader::new(file)))
}
