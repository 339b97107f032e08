use tracing::debug;

use crate::lut_pipeline::sniff::types::{ByteOrder, Geometry};

const SAMPLE_ROWS: usize = 4;

/// Infers channel order from the first grid rows.
///
/// The first entries of a 3D LUT walk the red axis with green and blue held at
/// zero, so whichever stored byte climbs faster is red. Returns `None` when
/// fewer than two rows are readable.
pub(crate) fn detect_from_samples(blob: &[u8], geometry: &Geometry) -> Option<ByteOrder> {
    let samples: Vec<(i32, i32)> = (0..SAMPLE_ROWS.min(geometry.grid_size))
        .map(|row| geometry.data_offset + row * geometry.channel_count)
        .map_while(|idx| blob.get(idx..idx + 3))
        .map(|record| (record[0] as i32, record[2] as i32))
        .collect();

    let (first, last) = match samples.as_slice() {
        [first, .., last] => (first, last),
        _ => return None,
    };

    let byte0_delta = last.0 - first.0;
    let byte2_delta = last.1 - first.1;
    debug!(byte0_delta, byte2_delta, rows = samples.len(), "Sampled channel order");

    Some(if byte2_delta > byte0_delta {
        ByteOrder::Bgr
    } else {
        ByteOrder::Rgb
    })
}

/// Container fallback when sampling is impossible: BGR unless the name marks
/// an RGBA export.
pub(crate) fn container_fallback(file_name: Option<&str>) -> ByteOrder {
    match file_name {
        Some(name) if name.to_lowercase().contains(".rgba.") => ByteOrder::Rgb,
        _ => ByteOrder::Bgr,
    }
}

/// Headerless dumps are BGR unless explicitly named `.rgb.`.
pub(crate) fn raw_default(file_name: Option<&str>) -> ByteOrder {
    let Some(name) = file_name.map(str::to_lowercase) else {
        return ByteOrder::Bgr;
    };
    if name.contains(".rgb.") && !name.contains(".rgba.") {
        ByteOrder::Rgb
    } else {
        ByteOrder::Bgr
    }
}
