//! File, stdin and stdout boundary.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Read the whole input file, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> CliResult<Vec<u8>> {
    match file {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::file(
                    path,
                    "Input file is not accessible",
                    io::Error::from(io::ErrorKind::NotFound),
                ));
            }
            tracing::debug!("Reading input from {}", path.display());
            fs::read(path).map_err(|e| CliError::file(path, "Failed to read input file", e))
        }
        None => {
            tracing::debug!("Reading input from stdin until two consecutive blank lines");
            Ok(read_until_blank_lines(io::stdin().lock())?)
        }
    }
}

/// Collect lines until two consecutive blank lines or end of input.
///
/// The first blank line of a pair is kept; the terminating one is not.
pub fn read_until_blank_lines<R: BufRead>(reader: R) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    let mut blank_run = 0;
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                break;
            }
        } else {
            blank_run = 0;
        }
        data.extend_from_slice(line.as_bytes());
        data.push(b'\n');
    }
    Ok(data)
}

/// Write to the output file, or stdout when no file is given.
///
/// An existing file is only replaced when `force` is set.
pub fn write_output(file: Option<&Path>, force: bool, data: &[u8]) -> CliResult<()> {
    match file {
        Some(path) => {
            ensure_writable(path, force)?;
            fs::write(path, data)
                .map_err(|e| CliError::file(path, "Failed to write output file", e))?;
            tracing::info!("Wrote {} bytes to {}", data.len(), path.display());
            Ok(())
        }
        None => Ok(write_to(io::stdout().lock(), data)?),
    }
}

/// Refuse to clobber an existing output file without `force`.
pub fn ensure_writable(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

fn write_to<W: Write>(mut writer: W, data: &[u8]) -> io::Result<()> {
    writer.write_all(data)?;
    if !data.ends_with(b"\n") {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
