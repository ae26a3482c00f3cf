use std::path::Path;

use anyhow::Result;
use uvvis_core::config::{load_config, ConverterConfig};

/// Build the effective config: defaults, then the optional config file,
/// then command-line overrides.
pub fn effective_config(
    config_path: Option<&Path>,
    min_wavelength: Option<u32>,
    max_wavelength: Option<u32>,
    overwrite: bool,
) -> Result<ConverterConfig> {
    let base = match config_path {
        Some(path) => load_config(path)?,
        None => ConverterConfig::default(),
    };
    let config = base.with_overrides(min_wavelength, max_wavelength, overwrite);
    config.validate()?;
    Ok(config)
}
