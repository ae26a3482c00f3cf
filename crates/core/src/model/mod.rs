//! Core data model for binary containers and the spectra extracted from them.
//!
//! Everything here is a plain value: containers are loaded once, and every
//! later stage derives new values from them instead of mutating shared state.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// Which of the two supported container layouts a file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// `.KD` files: one or more spectra, one per marker occurrence.
    MultiSpectrum,
    /// `.SD` files: exactly one spectrum, optionally with a sample name.
    SingleSpectrum,
}

impl ContainerKind {
    /// All supported kinds, in the order they are listed to users.
    pub const ALL: [ContainerKind; 2] =
        [ContainerKind::MultiSpectrum, ContainerKind::SingleSpectrum];

    /// Canonical (upper-case) file extension for this kind, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ContainerKind::MultiSpectrum => "KD",
            ContainerKind::SingleSpectrum => "SD",
        }
    }

    /// Infer the container kind from an extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.extension().eq_ignore_ascii_case(ext))
    }

    /// Infer the container kind from a file path.
    pub fn from_path(path: &Path) -> ParseResult<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| ParseError::UnsupportedFileKind { path: path.to_path_buf() })
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Detector wavelength domain in whole nanometres, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavelengthRange {
    pub min: u32,
    pub max: u32,
}

impl WavelengthRange {
    pub const DEFAULT_MIN: u32 = 190;
    pub const DEFAULT_MAX: u32 = 1100;

    /// Build a validated range. Fails unless `min < max`.
    pub fn new(min: u32, max: u32) -> ParseResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check the `min < max` invariant (deserialized values bypass `new`).
    pub fn validate(&self) -> ParseResult<()> {
        if self.min >= self.max {
            return Err(ParseError::InvalidWavelengthRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Number of samples at a 1 nm step: `max - min + 1`.
    pub fn sample_count(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    /// Evenly spaced wavelengths from `min` to `max` over `count` samples.
    pub fn wavelengths(&self, count: usize) -> Vec<f64> {
        let min = f64::from(self.min);
        let max = f64::from(self.max);
        match count {
            0 => Vec::new(),
            1 => vec![min],
            _ => {
                let step = (max - min) / (count - 1) as f64;
                (0..count)
                    .map(|i| if i == count - 1 { max } else { min + step * i as f64 })
                    .collect()
            }
        }
    }
}

impl Default for WavelengthRange {
    fn default() -> Self {
        Self { min: Self::DEFAULT_MIN, max: Self::DEFAULT_MAX }
    }
}

impl fmt::Display for WavelengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} nm", self.min, self.max)
    }
}

/// Raw bytes of a `.KD`/`.SD` file together with where they came from.
#[derive(Debug, Clone)]
pub struct BinaryContainer {
    pub path: PathBuf,
    pub kind: ContainerKind,
    pub bytes: Vec<u8>,
}

impl BinaryContainer {
    pub fn new(path: impl Into<PathBuf>, kind: ContainerKind, bytes: Vec<u8>) -> Self {
        Self { path: path.into(), kind, bytes }
    }

    /// Read a container fully into memory, inferring its kind from the extension.
    pub fn load(path: impl AsRef<Path>) -> ParseResult<Self> {
        let path = path.as_ref();
        let kind = ContainerKind::from_path(path)?;
        let bytes = std::fs::read(path)
            .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;
        Ok(Self::new(path, kind, bytes))
    }

    /// File stem used to name the exported file or folder.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("spectrum")
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Byte range `[start, end)` holding one spectrum's little-endian `f64` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumBlock {
    /// Offset of the marker occurrence that anchored this block.
    pub marker_offset: usize,
    pub start: usize,
    pub end: usize,
}

impl SpectrumBlock {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of whole 8-byte samples in the block.
    pub fn sample_count(&self) -> usize {
        self.len() / 8
    }

    /// Borrow this block's bytes out of the container buffer.
    pub fn slice<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.start..self.end]
    }
}

/// One decoded scan: paired wavelength and absorbance columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// 1-based position of the spectrum within its container.
    pub index: usize,
    /// Sample name recovered from the container, if any.
    pub name: Option<String>,
    pub wavelengths: Vec<f64>,
    pub absorbances: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.absorbances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.absorbances.is_empty()
    }

    /// Iterate `(wavelength, absorbance)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths.iter().copied().zip(self.absorbances.iter().copied())
    }
}

/// How the exporter should lay out a set of spectra on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "shape")]
pub enum ExportShape {
    /// One delimited file next to the source file.
    SingleFile,
    /// A folder next to the source file holding `count` delimited files.
    Folder { count: usize },
}

/// Every spectrum extracted from one container, in acquisition order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSet {
    pub name: String,
    pub source: PathBuf,
    pub kind: ContainerKind,
    pub spectra: Vec<Spectrum>,
}

impl SpectrumSet {
    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }

    /// Multi-spectrum containers with more than one block become a folder;
    /// everything else is written as a single file.
    pub fn export_shape(&self) -> ExportShape {
        match (self.kind, self.spectra.len()) {
            (ContainerKind::MultiSpectrum, n) if n > 1 => ExportShape::Folder { count: n },
            _ => ExportShape::SingleFile,
        }
    }
}
