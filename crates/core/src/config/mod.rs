use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::WavelengthRange;

/// Serializable conversion settings.
///
/// Every field has a default, so an empty JSON object (or YAML document) is a
/// valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Wavelength domain recorded by the detector.
    #[serde(default)]
    pub wavelength_range: WavelengthRange,
    /// Column delimiter for exported tables. Must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Replace existing outputs instead of picking a ` (n)` suffixed name.
    #[serde(default)]
    pub overwrite: bool,
}

fn default_delimiter() -> char {
    ','
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            wavelength_range: WavelengthRange::default(),
            delimiter: default_delimiter(),
            overwrite: false,
        }
    }
}

impl ConverterConfig {
    /// Apply command-line overrides on top of file/default values.
    pub fn with_overrides(
        mut self,
        min_wavelength: Option<u32>,
        max_wavelength: Option<u32>,
        overwrite: bool,
    ) -> Self {
        if let Some(min) = min_wavelength {
            self.wavelength_range.min = min;
        }
        if let Some(max) = max_wavelength {
            self.wavelength_range.max = max;
        }
        self.overwrite |= overwrite;
        self
    }

    /// Check the wavelength range and delimiter.
    pub fn validate(&self) -> Result<()> {
        self.wavelength_range.validate()?;
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the single byte the CSV writer expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        let printable = self.delimiter.is_ascii() && !self.delimiter.is_ascii_control();
        if printable || self.delimiter == '\t' {
            Ok(self.delimiter as u8)
        } else {
            Err(anyhow!(
                "Delimiter must be a printable ASCII character or tab, got {:?}",
                self.delimiter
            ))
        }
    }
}

/// Load a config file (`.json`, `.yaml` or `.yml`) and validate it.
pub fn load_config(path: &Path) -> Result<ConverterConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let config: ConverterConfig = match ext.as_str() {
        "json" => serde_json::from_str(&body).context("Failed to parse config JSON")?,
        "yaml" | "yml" => serde_yaml::from_str(&body).context("Failed to parse config YAML")?,
        other => bail!("Unsupported config extension '{other}' (expected json, yaml or yml)"),
    };
    config.validate().with_context(|| format!("Invalid config at {}", path.display()))?;
    Ok(config)
}
