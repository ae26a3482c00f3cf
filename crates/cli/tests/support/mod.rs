//! Synthetic `.KD`/`.SD` files for CLI tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use uvvis_core::format::{NARROW_AU_HEADER, NARROW_SAMPLE_NAME};

/// Narrow-header file with one block per offset; each block holds `samples`
/// copies of its 1-based position.
pub fn write_container(dir: &Path, file_name: &str, offsets: &[usize], samples: usize) -> PathBuf {
    let mut buf = Vec::new();
    for (i, &offset) in offsets.iter().enumerate() {
        let values: Vec<u8> =
            std::iter::repeat((i + 1) as f64).take(samples).flat_map(|v| v.to_le_bytes()).collect();
        place(&mut buf, offset, NARROW_AU_HEADER);
        place(&mut buf, offset + NARROW_AU_HEADER.len(), &values);
    }
    let path = dir.join(file_name);
    fs::write(&path, buf).expect("write container");
    path
}

/// Single-spectrum file carrying a sample name ahead of its block.
pub fn write_named_single(dir: &Path, file_name: &str, name: &str, samples: usize) -> PathBuf {
    let mut buf = NARROW_SAMPLE_NAME.to_vec();
    buf.extend_from_slice(name.as_bytes());
    buf.push(0);
    buf.extend_from_slice(NARROW_AU_HEADER);
    buf.extend(std::iter::repeat(0.75f64).take(samples).flat_map(|v| v.to_le_bytes()));
    let path = dir.join(file_name);
    fs::write(&path, buf).expect("write container");
    path
}

fn place(buf: &mut Vec<u8>, offset: usize, bytes: &[u8]) {
    if buf.len() < offset + bytes.len() {
        buf.resize(offset + bytes.len(), 0);
    }
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}
