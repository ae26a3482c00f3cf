//! Per-kind format table.
//!
//! The header bytes and offsets below were recovered empirically from files
//! written by the 845x acquisition software. They are data, not rules: a new
//! software revision is supported by adding a [`MarkerVariant`] here rather
//! than by branching in the parser.

use serde::Serialize;

use crate::model::{ContainerKind, WavelengthRange};

/// How the characters following a marker are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// One byte per character, terminated by `0x00`.
    Latin1,
    /// Two little-endian bytes per character, terminated by `0x0000`.
    Utf16Le,
}

/// Location of an optional sample name inside a single-spectrum container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameField {
    #[serde(serialize_with = "serialize_hex")]
    pub marker: &'static [u8],
    pub encoding: TextEncoding,
    /// Upper bound on decoded characters; longer runs are cut here.
    pub max_chars: usize,
}

/// One known absorbance header and where its data starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerVariant {
    /// Human-readable rendering of the header, for diagnostics.
    pub label: &'static str,
    #[serde(serialize_with = "serialize_hex")]
    pub marker: &'static [u8],
    /// Distance from the start of the marker to the first sample byte.
    pub data_offset: usize,
    pub name_field: Option<NameField>,
}

/// How many samples a block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleCountRule {
    /// One sample per nanometre across the configured range (both ends inclusive).
    OnePerNanometre,
}

impl SampleCountRule {
    pub fn sample_count(self, range: &WavelengthRange) -> usize {
        match self {
            SampleCountRule::OnePerNanometre => range.sample_count(),
        }
    }
}

/// Everything the parser needs to know about one container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatProfile {
    pub kind: ContainerKind,
    /// Tried in order; the first variant present anywhere in the file wins.
    pub variants: &'static [MarkerVariant],
    pub sample_count: SampleCountRule,
    /// Whether every marker occurrence anchors a block, or only the first.
    pub multi_block: bool,
}

impl FormatProfile {
    /// Look up the profile for a container kind.
    pub fn for_kind(kind: ContainerKind) -> &'static FormatProfile {
        match kind {
            ContainerKind::MultiSpectrum => &MULTI_SPECTRUM,
            ContainerKind::SingleSpectrum => &SINGLE_SPECTRUM,
        }
    }

    /// Byte length of one block under this profile.
    pub fn block_len(&self, range: &WavelengthRange) -> usize {
        self.sample_count.sample_count(range) * 8
    }
}

/// `( A U ) ` with each character followed by a zero byte.
pub const WIDE_AU_HEADER: &[u8] = b"\x28\x00\x41\x00\x55\x00\x29\x00";
/// `(AU)` followed by a terminating zero byte.
pub const NARROW_AU_HEADER: &[u8] = b"\x28\x41\x55\x29\x00";

/// `SampleName` in the wide encoding.
pub const WIDE_SAMPLE_NAME: &[u8] = b"S\x00a\x00m\x00p\x00l\x00e\x00N\x00a\x00m\x00e\x00";
/// `SampleName` followed by a zero byte.
pub const NARROW_SAMPLE_NAME: &[u8] = b"SampleName\x00";

const MAX_NAME_CHARS: usize = 255;

static MULTI_SPECTRUM_VARIANTS: [MarkerVariant; 2] = [
    MarkerVariant {
        label: "( A U ) ",
        marker: WIDE_AU_HEADER,
        data_offset: 17,
        name_field: None,
    },
    MarkerVariant { label: "(AU) ", marker: NARROW_AU_HEADER, data_offset: 5, name_field: None },
];

static SINGLE_SPECTRUM_VARIANTS: [MarkerVariant; 2] = [
    MarkerVariant {
        label: "( A U ) ",
        marker: WIDE_AU_HEADER,
        data_offset: 17,
        name_field: Some(NameField {
            marker: WIDE_SAMPLE_NAME,
            encoding: TextEncoding::Utf16Le,
            max_chars: MAX_NAME_CHARS,
        }),
    },
    MarkerVariant {
        label: "(AU) ",
        marker: NARROW_AU_HEADER,
        data_offset: 5,
        name_field: Some(NameField {
            marker: NARROW_SAMPLE_NAME,
            encoding: TextEncoding::Latin1,
            max_chars: MAX_NAME_CHARS,
        }),
    },
];

static MULTI_SPECTRUM: FormatProfile = FormatProfile {
    kind: ContainerKind::MultiSpectrum,
    variants: &MULTI_SPECTRUM_VARIANTS,
    sample_count: SampleCountRule::OnePerNanometre,
    multi_block: true,
};

static SINGLE_SPECTRUM: FormatProfile = FormatProfile {
    kind: ContainerKind::SingleSpectrum,
    variants: &SINGLE_SPECTRUM_VARIANTS,
    sample_count: SampleCountRule::OnePerNanometre,
    multi_block: false,
};

fn serialize_hex<S: serde::Serializer>(bytes: &&'static [u8], s: S) -> Result<S::Ok, S::Error> {
    let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
    s.serialize_str(&hex.join(" "))
}
