use std::env;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use uvvis_core::ContainerKind;

pub mod commands;

/// Resolve a user-supplied path to an absolute one, relative to the current
/// working directory. The path does not need to exist.
pub fn absolute_input_path(raw: &str) -> Result<PathBuf> {
    let trimmed = raw.trim().trim_matches('"');
    let path = Path::new(trimmed);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    match path.canonicalize() {
        Ok(p) => Ok(p),
        Err(_) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(cwd.join(path))
        }
    }
}

/// Whether `path` names an existing `.KD`/`.SD` file.
pub fn is_supported_file(path: &Path) -> bool {
    path.is_file() && ContainerKind::from_path(path).is_ok()
}

/// Ask for a file path until a supported, existing file is entered.
///
/// Fails if input ends before a valid path was given.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    loop {
        write!(output, "Enter a file path: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read file path")? == 0 {
            bail!("No input path provided");
        }
        if line.trim().is_empty() {
            continue;
        }

        let path = absolute_input_path(&line)?;
        if is_supported_file(&path) {
            return Ok(path);
        }
        writeln!(output, "Invalid file path (must be a .KD or .SD file).")?;
    }
}
