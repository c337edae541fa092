use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
};

use serde::Serialize;

use crate::cli::HYPHEN;

/// Serializes the given value to the respective output source.
///
/// A path of `-` or no path at all selects stdout. Output to a
/// terminal is pretty-printed; files and pipes get minified JSON.
pub fn serialize_to_output_source<T: Serialize>(
    out: Option<PathBuf>,
    value: &T,
) -> eyre::Result<()> {
    match out {
        Some(out) if out.as_os_str() != HYPHEN => {
            let file = fs::File::create(&out)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, value)?;
            writer.flush()?;
        }

        _ => {
            let mut stdout = io::stdout().lock();

            if stdout.is_terminal() {
                serde_json::to_writer_pretty(&mut stdout, value)?;
                writeln!(stdout)?;
            } else {
                serde_json::to_writer(&mut stdout, value)?;
            }
        }
    }

    Ok(())
}
