/// Offsets of every non-overlapping occurrence of `marker` in `haystack`,
/// scanning left to right. An empty marker never matches.
pub fn find_all(haystack: &[u8], marker: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    if marker.is_empty() {
        return offsets;
    }

    let mut from = 0;
    while let Some(pos) = find_from(haystack, marker, from) {
        offsets.push(pos);
        from = pos + marker.len();
    }
    offsets
}

/// Offset of the first occurrence of `marker`, if any.
pub fn find_first(haystack: &[u8], marker: &[u8]) -> Option<usize> {
    if marker.is_empty() {
        return None;
    }
    find_from(haystack, marker, 0)
}

fn find_from(haystack: &[u8], marker: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() || marker.len() > haystack.len() - from {
        return None;
    }
    haystack[from..].windows(marker.len()).position(|window| window == marker).map(|p| p + from)
}
