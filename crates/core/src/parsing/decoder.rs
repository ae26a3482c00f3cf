use byteorder::{ByteOrder, LittleEndian};

use crate::error::{ParseError, ParseResult};
use crate::model::{Spectrum, SpectrumBlock, WavelengthRange};

const SAMPLE_SIZE: usize = 8;

/// Decode a run of little-endian `f64` values.
///
/// `start` is only used to report where a malformed block begins.
pub fn decode_absorbances(bytes: &[u8], start: usize) -> ParseResult<Vec<f64>> {
    if bytes.len() % SAMPLE_SIZE != 0 {
        return Err(ParseError::MalformedBlock { start, len: bytes.len() });
    }
    let mut values = vec![0.0; bytes.len() / SAMPLE_SIZE];
    LittleEndian::read_f64_into(bytes, &mut values);
    Ok(values)
}

/// Decode `block` out of the container buffer and pair each sample with a
/// wavelength spread evenly across `range`.
pub fn decode_block(
    bytes: &[u8],
    block: &SpectrumBlock,
    index: usize,
    range: &WavelengthRange,
) -> ParseResult<Spectrum> {
    let absorbances = decode_absorbances(block.slice(bytes), block.start)?;
    let wavelengths = range.wavelengths(absorbances.len());
    Ok(Spectrum { index, name: None, wavelengths, absorbances })
}
