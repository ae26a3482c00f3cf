use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading and parsing `.KD`/`.SD` containers.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file extension is neither `.KD` nor `.SD`.
    #[error("Unsupported file kind (expected a .KD or .SD file): {}", .path.display())]
    UnsupportedFileKind { path: PathBuf },

    /// None of the known absorbance headers occur in the file.
    ///
    /// Usually means the file was written by an unsupported software version
    /// or is not a UV-Vis container at all.
    #[error("No absorbance data header found in {}", .path.display())]
    MarkerNotFound { path: PathBuf },

    /// A block computed from a marker runs past the end of the file.
    #[error(
        "Truncated absorbance block in {}: marker at {marker_offset} needs bytes {start}..{end} but file has {available}",
        .path.display()
    )]
    TruncatedBlock {
        path: PathBuf,
        marker_offset: usize,
        start: usize,
        end: usize,
        available: usize,
    },

    /// A block's byte length is not a whole number of 8-byte samples.
    #[error("Malformed absorbance block at offset {start}: {len} bytes is not a multiple of 8")]
    MalformedBlock { start: usize, len: usize },

    /// The configured wavelength range violates `min < max`.
    #[error("Wavelength range error: minimum {min} nm must be below maximum {max} nm")]
    InvalidWavelengthRange { min: u32, max: u32 },

    /// An export was requested for a set that holds no spectra.
    #[error("No spectra to export from {}", .path.display())]
    EmptySpectrumSet { path: PathBuf },

    /// Reading the source or writing the destination failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
