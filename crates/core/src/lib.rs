//! uvvis-core
//!
//! Core library for extracting absorbance spectra from UV-Vis `.KD`
//! (multi-spectrum) and `.SD` (single-spectrum) binary containers.
//!
//! The containers are undocumented. Parsing works by locating a known
//! absorbance header inside the raw bytes, anchoring fixed-length blocks of
//! little-endian `f64` samples to each occurrence, and pairing the samples
//! with an evenly spaced wavelength axis.
//!
//! All substantive logic lives here so it is fully testable and reusable
//! from multiple frontends; the `uv2csv` CLI is a thin wrapper.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod parsing;
pub mod services;

pub use error::{ParseError, ParseResult};
pub use model::{
    BinaryContainer, ContainerKind, ExportShape, Spectrum, SpectrumBlock, SpectrumSet,
    WavelengthRange,
};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
