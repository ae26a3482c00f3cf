use crate::format::{NameField, TextEncoding};
use crate::parsing::scanner::find_first;

/// Recover the sample name stored after `field.marker`, if present.
///
/// The name runs until a zero terminator in the field's encoding, the end of
/// the buffer, or `field.max_chars`, whichever comes first. Surrounding
/// whitespace is trimmed and an empty name counts as absent.
pub fn extract_sample_name(bytes: &[u8], field: &NameField) -> Option<String> {
    let start = find_first(bytes, field.marker)? + field.marker.len();
    let tail = &bytes[start..];

    let raw = match field.encoding {
        TextEncoding::Latin1 => tail
            .iter()
            .take_while(|&&b| b != 0)
            .take(field.max_chars)
            .map(|&b| char::from(b))
            .collect::<String>(),
        TextEncoding::Utf16Le => {
            let units = tail
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .take_while(|&u| u != 0)
                .take(field.max_chars);
            char::decode_utf16(units)
                .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect::<String>()
        }
    };

    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
