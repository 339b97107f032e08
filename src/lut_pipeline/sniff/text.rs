const PRINTABLE_LEAD_LEN: usize = 20;
const MARKER_SCAN_LEN: usize = 500;
const TEXT_MARKERS: [&str; 2] = ["LUT_3D_SIZE", "TITLE"];

/// True when `blob` looks like a `.cube` file: a printable lead-in and a size
/// or title keyword near the start.
pub(crate) fn is_text_lut(blob: &[u8]) -> bool {
    if blob.is_empty() {
        return false;
    }

    let lead = &blob[..blob.len().min(PRINTABLE_LEAD_LEN)];
    if !lead.iter().all(|&b| b.is_ascii_graphic() || b.is_ascii_whitespace()) {
        return false;
    }

    // Non-ASCII bytes are dropped, not replaced.
    let prefix: String = blob[..blob.len().min(MARKER_SCAN_LEN)]
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();

    TEXT_MARKERS.iter().any(|marker| prefix.contains(marker))
}
