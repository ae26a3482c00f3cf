//! Reverse-engineered parsing stages for `.KD`/`.SD` containers.
//!
//! Each stage is a free function over borrowed input that returns a new value:
//! - `scanner`: find every occurrence of a marker.
//! - `layout`: turn marker offsets into checked block ranges.
//! - `decoder`: decode a block into a wavelength/absorbance table.
//! - `metadata`: recover an optional sample name.

pub mod decoder;
pub mod layout;
pub mod metadata;
pub mod scanner;

pub use decoder::{decode_absorbances, decode_block};
pub use layout::{resolve_blocks, resolve_layout, select_variant, ResolvedLayout};
pub use metadata::extract_sample_name;
pub use scanner::{find_all, find_first};
