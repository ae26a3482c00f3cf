use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::error::ParseResult;
use crate::format::FormatProfile;
use crate::model::{
    BinaryContainer, ContainerKind, Spectrum, SpectrumBlock, SpectrumSet, WavelengthRange,
};
use crate::parsing::{decode_block, extract_sample_name, resolve_layout};

/// Parse an in-memory container into its spectra.
///
/// Nothing is written anywhere; any parse failure aborts the whole container.
pub fn parse_container(
    container: &BinaryContainer,
    range: &WavelengthRange,
) -> ParseResult<SpectrumSet> {
    range.validate()?;
    let layout = resolve_layout(container, range)?;
    let mut spectra = decode_blocks(&container.bytes, &layout.blocks, range)?;

    if let Some(field) = &layout.variant.name_field {
        let name = extract_sample_name(&container.bytes, field);
        debug!("{}: sample name {:?}", container.path.display(), name);
        if let Some(first) = spectra.first_mut() {
            first.name = name;
        }
    }

    info!(
        "{}: decoded {} spectrum/spectra of {} samples",
        container.path.display(),
        spectra.len(),
        spectra.first().map(Spectrum::len).unwrap_or_default()
    );

    Ok(SpectrumSet {
        name: container.base_name(),
        source: container.path.clone(),
        kind: container.kind,
        spectra,
    })
}

/// Load a `.KD`/`.SD` file from disk and parse it.
pub fn read_spectra(path: impl AsRef<Path>, range: &WavelengthRange) -> ParseResult<SpectrumSet> {
    let container = BinaryContainer::load(path)?;
    parse_container(&container, range)
}

#[cfg(not(feature = "parallel"))]
fn decode_blocks(
    bytes: &[u8],
    blocks: &[SpectrumBlock],
    range: &WavelengthRange,
) -> ParseResult<Vec<Spectrum>> {
    blocks.iter().enumerate().map(|(i, block)| decode_block(bytes, block, i + 1, range)).collect()
}

// Indexed collect keeps block order regardless of which worker finishes first.
#[cfg(feature = "parallel")]
fn decode_blocks(
    bytes: &[u8],
    blocks: &[SpectrumBlock],
    range: &WavelengthRange,
) -> ParseResult<Vec<Spectrum>> {
    use rayon::prelude::*;

    blocks
        .par_iter()
        .enumerate()
        .map(|(i, block)| decode_block(bytes, block, i + 1, range))
        .collect()
}

/// Diagnostic view of how a container was laid out, without decoding samples.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerInspection {
    pub path: PathBuf,
    pub kind: ContainerKind,
    pub size: usize,
    pub header: String,
    pub data_offset: usize,
    pub marker_offsets: Vec<usize>,
    pub blocks: Vec<SpectrumBlock>,
    pub samples_per_block: usize,
    pub sample_name: Option<String>,
}

/// Locate markers and blocks in a container and report what was found.
pub fn inspect_container(
    container: &BinaryContainer,
    range: &WavelengthRange,
) -> ParseResult<ContainerInspection> {
    range.validate()?;
    let layout = resolve_layout(container, range)?;
    let sample_name = layout
        .variant
        .name_field
        .as_ref()
        .and_then(|field| extract_sample_name(&container.bytes, field));

    Ok(ContainerInspection {
        path: container.path.clone(),
        kind: container.kind,
        size: container.len(),
        header: layout.variant.label.to_string(),
        data_offset: layout.variant.data_offset,
        marker_offsets: layout.marker_offsets,
        blocks: layout.blocks,
        samples_per_block: FormatProfile::for_kind(container.kind).sample_count.sample_count(range),
        sample_name,
    })
}
