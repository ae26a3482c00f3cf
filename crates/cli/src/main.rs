use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use uv2csv::commands::{convert_command, formats_command, inspect_command, ConvertOptions};

/// Convert UV-Vis `.KD`/`.SD` binary files to CSV.
///
/// This CLI is a thin wrapper around `uvvis-core` (exposed in code as `uvvis_core`).
/// All parsing and export logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "uv2csv",
    version,
    about = "Extract absorbance spectra from UV-Vis .KD/.SD files",
    long_about = None
)]
struct Cli {
    /// Log parser decisions (marker offsets, block ranges) to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Wavelength and config options shared by `convert` and `inspect`.
#[derive(Args, Debug, Default)]
struct RangeArgs {
    /// Config file (.json, .yaml or .yml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lowest wavelength recorded by the detector, in nm. Defaults to 190.
    #[arg(long)]
    min_wavelength: Option<u32>,

    /// Highest wavelength recorded by the detector, in nm. Defaults to 1100.
    #[arg(long)]
    max_wavelength: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one or more .KD/.SD files to CSV.
    ///
    /// A file holding one spectrum becomes `<name>.csv` next to the source.
    /// A .KD file holding several spectra becomes a `<name>/` folder with one
    /// CSV per spectrum. With no paths, a path is read from stdin.
    Convert {
        /// Files to convert.
        paths: Vec<String>,

        #[command(flatten)]
        range: RangeArgs,

        /// Replace existing outputs instead of adding a ` (n)` suffix.
        #[arg(long, default_value_t = false)]
        overwrite: bool,

        /// Emit a JSON summary instead of progress lines.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show where absorbance headers and blocks sit in a file, without exporting.
    Inspect {
        /// File to inspect.
        path: String,

        #[command(flatten)]
        range: RangeArgs,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List supported file kinds and their absorbance headers.
    Formats {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Default to an interactive convert if no subcommand is provided.
    let command = cli.command.unwrap_or(Command::Convert {
        paths: Vec::new(),
        range: RangeArgs::default(),
        overwrite: false,
        json: false,
    });

    match command {
        Command::Convert { paths, range, overwrite, json } => {
            let options = ConvertOptions {
                config: range.config,
                min_wavelength: range.min_wavelength,
                max_wavelength: range.max_wavelength,
                overwrite,
                json,
            };
            convert_command(&paths, &options)?;
        }
        Command::Inspect { path, range, json } => {
            inspect_command(
                &path,
                range.config.as_deref(),
                range.min_wavelength,
                range.max_wavelength,
                json,
            )?;
        }
        Command::Formats { json } => formats_command(json)?,
    }

    Ok(())
}
