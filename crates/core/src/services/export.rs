use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::config::ConverterConfig;
use crate::error::{ParseError, ParseResult};
use crate::model::{ExportShape, Spectrum, SpectrumSet};

pub const WAVELENGTH_COLUMN: &str = "Wavelength (nm)";
pub const ABSORBANCE_COLUMN: &str = "Absorbance (AU)";

/// Where a spectrum set ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutcome {
    pub shape: ExportShape,
    /// The single file, or the folder holding one file per spectrum.
    pub path: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Trait implemented by spectrum writers; callers hand over a parsed set.
pub trait SpectrumExporter {
    fn export(&self, set: &SpectrumSet) -> ParseResult<ExportOutcome>;
}

/// Writes each spectrum as a two-column delimited text file next to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvExporter {
    pub delimiter: u8,
    pub overwrite: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { delimiter: b',', overwrite: false }
    }
}

impl CsvExporter {
    pub fn new(delimiter: u8, overwrite: bool) -> Self {
        Self { delimiter, overwrite }
    }

    pub fn from_config(config: &ConverterConfig) -> anyhow::Result<Self> {
        Ok(Self::new(config.delimiter_byte()?, config.overwrite))
    }

    /// Write one spectrum's wavelength/absorbance table to `path`.
    ///
    /// A failed write removes the file again, so `path` either holds the whole
    /// table or nothing.
    pub fn write_spectrum(&self, spectrum: &Spectrum, path: &Path) -> ParseResult<()> {
        self.write_file(path, |writer| {
            writer.write_record([WAVELENGTH_COLUMN, ABSORBANCE_COLUMN])?;
            for (wavelength, absorbance) in spectrum.points() {
                writer.write_record([wavelength.to_string(), absorbance.to_string()])?;
            }
            Ok(())
        })
    }

    fn write_file<F>(&self, path: &Path, fill: F) -> ParseResult<()>
    where
        F: FnOnce(&mut csv::Writer<fs::File>) -> csv::Result<()>,
    {
        let io_err = |e: csv::Error| ParseError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::from(e),
        };

        let mut writer =
            csv::WriterBuilder::new().delimiter(self.delimiter).from_path(path).map_err(io_err)?;
        let result = fill(&mut writer).and_then(|()| writer.flush().map_err(csv::Error::from));
        drop(writer);

        if let Err(err) = result {
            remove_partial_file(path);
            return Err(io_err(err));
        }
        Ok(())
    }

    fn target(&self, candidate: PathBuf, suffix: &str) -> PathBuf {
        if self.overwrite {
            candidate
        } else {
            next_free_path(candidate, suffix)
        }
    }

    /// Write every spectrum of `set` into `dir`, which holds no `.csv` files
    /// yet. Files written before a failure are removed again.
    fn export_folder(&self, set: &SpectrumSet, dir: &Path) -> ParseResult<Vec<PathBuf>> {
        let digits = set.len().to_string().len();
        let mut files: Vec<PathBuf> = Vec::with_capacity(set.len());
        for spectrum in &set.spectra {
            let stem = spectrum
                .name
                .as_deref()
                .map(sanitize_file_name)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("{:0digits$}", spectrum.index));
            // Only files from this run can collide here, e.g. two equal sample names.
            let file = next_free_path(dir.join(format!("{stem}.csv")), ".csv");
            if let Err(err) = self.write_spectrum(spectrum, &file) {
                for written in &files {
                    remove_partial_file(written);
                }
                return Err(err);
            }
            files.push(file);
        }
        Ok(files)
    }
}

impl SpectrumExporter for CsvExporter {
    fn export(&self, set: &SpectrumSet) -> ParseResult<ExportOutcome> {
        let parent = set.source.parent().map(Path::to_path_buf).unwrap_or_default();
        let shape = set.export_shape();

        match shape {
            ExportShape::SingleFile => {
                // `parse_container` never yields an empty set; hand-built sets can.
                let spectrum = set
                    .spectra
                    .first()
                    .ok_or_else(|| ParseError::EmptySpectrumSet { path: set.source.clone() })?;
                let file = self.target(parent.join(format!("{}.csv", set.name)), ".csv");
                self.write_spectrum(spectrum, &file)?;
                debug!("wrote {}", file.display());
                Ok(ExportOutcome { shape, path: file.clone(), files: vec![file] })
            }
            ExportShape::Folder { .. } => {
                let dir = self.target(parent.join(&set.name), "");
                let created = !dir.exists();
                if created {
                    fs::create_dir_all(&dir)
                        .map_err(|source| ParseError::Io { path: dir.clone(), source })?;
                } else {
                    clear_stale_tables(&dir)?;
                }
                match self.export_folder(set, &dir) {
                    Ok(files) => Ok(ExportOutcome { shape, path: dir, files }),
                    Err(err) if created => {
                        if let Err(cleanup) = fs::remove_dir_all(&dir) {
                            warn!("failed to remove partial export {}: {cleanup}", dir.display());
                        }
                        Err(err)
                    }
                    Err(err) => Err(err),
                }
            }
        }
    }
}

/// Remove the `.csv` files a previous export left in `dir`. Other entries stay.
fn clear_stale_tables(dir: &Path) -> ParseResult<()> {
    let io_err = |source| ParseError::Io { path: dir.to_path_buf(), source };
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_table = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_table && path.is_file() {
            debug!("removing stale {}", path.display());
            fs::remove_file(&path).map_err(|source| ParseError::Io { path: path.clone(), source })?;
        }
    }
    Ok(())
}

fn remove_partial_file(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            warn!("failed to remove partial export {}: {err}", path.display());
        }
    }
}

/// Replace characters that are not allowed in file names on common platforms.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    cleaned.trim().trim_end_matches('.').trim_end().to_string()
}

/// Return `candidate` if nothing exists there, otherwise the first free
/// `<stem> (n)<suffix>` sibling. `suffix` is the extension including its dot,
/// or empty for folders.
pub fn next_free_path(candidate: PathBuf, suffix: &str) -> PathBuf {
    if !candidate.exists() {
        return candidate;
    }
    let file_name = candidate.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let stem = file_name.strip_suffix(suffix).unwrap_or(file_name).to_string();
    let parent = candidate.parent().map(Path::to_path_buf).unwrap_or_default();

    (1..)
        .map(|n| parent.join(format!("{stem} ({n}){suffix}")))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
