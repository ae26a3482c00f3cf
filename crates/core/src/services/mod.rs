//! Conversion services built on the parsing stages.
//!
//! - `conversion`: container → `SpectrumSet` (and a layout-only inspection).
//! - `export`: `SpectrumSet` → delimited text files on disk.

pub mod conversion;
pub mod export;

pub use conversion::{inspect_container, parse_container, read_spectra, ContainerInspection};
pub use export::{
    next_free_path, sanitize_file_name, CsvExporter, ExportOutcome, SpectrumExporter,
    ABSORBANCE_COLUMN, WAVELENGTH_COLUMN,
};
