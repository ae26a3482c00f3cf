use std::path::Path;

use anyhow::{Context, Result};
use uvvis_core::services::{inspect_container, ContainerInspection};
use uvvis_core::BinaryContainer;

use crate::absolute_input_path;
use crate::commands::effective_config;

/// Report where the absorbance headers and blocks sit in a container.
pub fn inspect_command(
    path: &str,
    config_path: Option<&Path>,
    min_wavelength: Option<u32>,
    max_wavelength: Option<u32>,
    json: bool,
) -> Result<ContainerInspection> {
    let config = effective_config(config_path, min_wavelength, max_wavelength, false)?;
    let abs_path = absolute_input_path(path)?;
    let container = BinaryContainer::load(&abs_path)?;
    let report = inspect_container(&container, &config.wavelength_range)
        .with_context(|| format!("Failed to inspect {}", abs_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report);
    }

    println!("Container: {}", report.path.display());
    println!("  Kind: {} ({:?})", report.kind, report.kind);
    println!("  Size: {} bytes", report.size);
    println!("  Header: {:?} (data at +{})", report.header, report.data_offset);
    println!("  Markers ({}): {:?}", report.marker_offsets.len(), report.marker_offsets);
    println!("  Samples per block: {}", report.samples_per_block);
    println!("  Sample name: {}", report.sample_name.as_deref().unwrap_or("(none)"));
    println!("  Blocks ({}):", report.blocks.len());
    for (i, block) in report.blocks.iter().enumerate() {
        println!(
            "    {}: bytes {}..{} (marker at {})",
            i + 1,
            block.start,
            block.end,
            block.marker_offset
        );
    }

    Ok(report)
}
