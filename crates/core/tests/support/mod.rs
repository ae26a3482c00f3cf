//! Synthetic container builders shared by the integration tests.
#![allow(dead_code)]

use uvvis_core::format::{NARROW_AU_HEADER, WIDE_AU_HEADER};

/// Data offset that goes with [`WIDE_AU_HEADER`].
pub const WIDE_DATA_OFFSET: usize = 17;
/// Data offset that goes with [`NARROW_AU_HEADER`].
pub const NARROW_DATA_OFFSET: usize = 5;

pub fn encode(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// `n` evenly spaced values from 0.0 to 1.0 inclusive.
pub fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

/// Copy `bytes` into `buf` at `offset`, growing `buf` with zeros if needed.
pub fn place(buf: &mut Vec<u8>, offset: usize, bytes: &[u8]) {
    if buf.len() < offset + bytes.len() {
        buf.resize(offset + bytes.len(), 0);
    }
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// Buffer with the wide header at each offset, each followed by its block.
///
/// Later blocks overwrite earlier ones where they overlap.
pub fn wide_container(anchors: &[(usize, Vec<f64>)]) -> Vec<u8> {
    let mut buf = Vec::new();
    for (offset, values) in anchors {
        place(&mut buf, *offset, WIDE_AU_HEADER);
        place(&mut buf, offset + WIDE_DATA_OFFSET, &encode(values));
    }
    buf
}

/// Buffer with the narrow header at each offset, each followed by its block.
pub fn narrow_container(anchors: &[(usize, Vec<f64>)]) -> Vec<u8> {
    let mut buf = Vec::new();
    for (offset, values) in anchors {
        place(&mut buf, *offset, NARROW_AU_HEADER);
        place(&mut buf, offset + NARROW_DATA_OFFSET, &encode(values));
    }
    buf
}
