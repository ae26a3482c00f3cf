use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;
use serde::Serialize;
use uvvis_core::config::ConverterConfig;
use uvvis_core::services::{read_spectra, CsvExporter, ExportOutcome, SpectrumExporter};
use uvvis_core::ContainerKind;

use crate::commands::effective_config;
use crate::{absolute_input_path, prompt_for_path};

/// Options shared by every file in one `convert` run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub config: Option<PathBuf>,
    pub min_wavelength: Option<u32>,
    pub max_wavelength: Option<u32>,
    pub overwrite: bool,
    pub json: bool,
}

/// Result of converting one input file.
#[derive(Debug, Serialize)]
pub struct ConversionRecord {
    pub source: String,
    pub spectra: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ExportOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertSummary {
    pub converted: usize,
    pub failed: usize,
    pub files: Vec<ConversionRecord>,
}

/// Parse one container and export its spectra. Nothing is written if parsing fails.
pub fn convert_file(path: &Path, config: &ConverterConfig) -> Result<(usize, ExportOutcome)> {
    let set = read_spectra(path, &config.wavelength_range)
        .with_context(|| format!("Failed to convert {}", path.display()))?;
    let exporter = CsvExporter::from_config(config)?;
    let outcome = exporter
        .export(&set)
        .with_context(|| format!("Failed to export spectra from {}", path.display()))?;
    Ok((set.len(), outcome))
}

/// Convert every path in `paths`, or a path read from stdin when none are given.
///
/// A failing file does not stop the others; the command fails afterwards if
/// any file could not be converted.
pub fn convert_command(paths: &[String], options: &ConvertOptions) -> Result<ConvertSummary> {
    let config = effective_config(
        options.config.as_deref(),
        options.min_wavelength,
        options.max_wavelength,
        options.overwrite,
    )?;

    let inputs: Vec<PathBuf> = if paths.is_empty() {
        let mut input = io::stdin().lock();
        // Keep stdout clean for the JSON summary.
        let path = if options.json {
            prompt_for_path(&mut input, &mut io::stderr())?
        } else {
            prompt_for_path(&mut input, &mut io::stdout())?
        };
        vec![path]
    } else {
        paths.iter().map(|p| absolute_input_path(p)).collect::<Result<_>>()?
    };

    let mut files = Vec::with_capacity(inputs.len());
    for path in &inputs {
        debug!("converting {} with range {}", path.display(), config.wavelength_range);
        if !options.json {
            match ContainerKind::from_path(path) {
                Ok(kind) => println!("Reading {kind} file: {}", path.display()),
                Err(_) => println!("Reading {}", path.display()),
            }
        }

        let source = path.display().to_string();
        match convert_file(path, &config) {
            Ok((spectra, outcome)) => {
                if !options.json {
                    println!("Finished export: {}", outcome.path.display());
                }
                files.push(ConversionRecord {
                    source,
                    spectra,
                    outcome: Some(outcome),
                    error: None,
                });
            }
            Err(err) => {
                eprintln!("Error: {err:#}");
                files.push(ConversionRecord {
                    source,
                    spectra: 0,
                    outcome: None,
                    error: Some(format!("{err:#}")),
                });
            }
        }
    }

    let failed = files.iter().filter(|f| f.error.is_some()).count();
    let summary = ConvertSummary { converted: files.len() - failed, failed, files };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if summary.failed > 0 {
        bail!("{} of {} file(s) failed to convert", summary.failed, summary.files.len());
    }
    Ok(summary)
}
