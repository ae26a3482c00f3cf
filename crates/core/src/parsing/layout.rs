use log::{debug, warn};

use crate::error::{ParseError, ParseResult};
use crate::format::{FormatProfile, MarkerVariant};
use crate::model::{BinaryContainer, SpectrumBlock, WavelengthRange};
use crate::parsing::scanner::find_all;

/// Marker variant chosen for a container plus the blocks it anchors.
#[derive(Debug, Clone)]
pub struct ResolvedLayout {
    pub variant: &'static MarkerVariant,
    /// Every occurrence of the chosen marker, including ones that anchor no block.
    pub marker_offsets: Vec<usize>,
    pub blocks: Vec<SpectrumBlock>,
}

/// Pick the first marker variant of `profile` that occurs in `container`,
/// returning it with all of its offsets.
pub fn select_variant(
    container: &BinaryContainer,
    profile: &'static FormatProfile,
) -> ParseResult<(&'static MarkerVariant, Vec<usize>)> {
    for variant in profile.variants {
        let offsets = find_all(&container.bytes, variant.marker);
        if !offsets.is_empty() {
            debug!(
                "{}: header {:?} found at {} offset(s): {:?}",
                container.path.display(),
                variant.label,
                offsets.len(),
                offsets
            );
            return Ok((variant, offsets));
        }
    }
    Err(ParseError::MarkerNotFound { path: container.path.clone() })
}

/// Turn marker offsets into checked block ranges.
///
/// Multi-block profiles get one block per offset, in offset order; blocks may
/// overlap and are never merged. Single-block profiles use the first offset.
pub fn resolve_blocks(
    container: &BinaryContainer,
    profile: &FormatProfile,
    variant: &MarkerVariant,
    offsets: &[usize],
    range: &WavelengthRange,
) -> ParseResult<Vec<SpectrumBlock>> {
    if offsets.is_empty() {
        return Err(ParseError::MarkerNotFound { path: container.path.clone() });
    }

    let anchors = if profile.multi_block {
        offsets
    } else {
        if offsets.len() > 1 {
            warn!(
                "{}: expected one absorbance header, found {}; using offset {}",
                container.path.display(),
                offsets.len(),
                offsets[0]
            );
        }
        &offsets[..1]
    };

    let block_len = profile.block_len(range);
    anchors
        .iter()
        .map(|&marker_offset| {
            let start = marker_offset.saturating_add(variant.data_offset);
            let end = start.saturating_add(block_len);
            if end > container.len() {
                return Err(ParseError::TruncatedBlock {
                    path: container.path.clone(),
                    marker_offset,
                    start,
                    end,
                    available: container.len(),
                });
            }
            debug!("block anchored at {marker_offset}: bytes {start}..{end}");
            Ok(SpectrumBlock { marker_offset, start, end })
        })
        .collect()
}

/// Run variant selection and block resolution for a container.
pub fn resolve_layout(
    container: &BinaryContainer,
    range: &WavelengthRange,
) -> ParseResult<ResolvedLayout> {
    let profile = FormatProfile::for_kind(container.kind);
    let (variant, marker_offsets) = select_variant(container, profile)?;
    let blocks = resolve_blocks(container, profile, variant, &marker_offsets, range)?;
    Ok(ResolvedLayout { variant, marker_offsets, blocks })
}
