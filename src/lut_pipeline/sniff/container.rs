//! `.MS-LUT` container sniffing.

use tracing::debug;

use crate::lut_pipeline::common::error::{ConversionError, Result};
use crate::lut_pipeline::sniff::byte_order;
use crate::lut_pipeline::sniff::strategies::{first_match, CONTAINER_STRATEGIES};
use crate::lut_pipeline::sniff::types::{ByteOrder, ContainerHeader, FormatGuess, PayloadEncoding, MAGIC};

/// Magic plus the version word.
const MIN_HEADER_LEN: usize = 12;
const VERSION_OFFSET: usize = 8;
const OFFSET_HINT_FIELDS: [usize; 2] = [0x20, 0x28];
/// Hints are only trusted when both 8-byte fields are fully present.
const OFFSET_HINT_MIN_LEN: usize = 0x30;

fn read_u32_le(blob: &[u8], at: usize) -> Option<u32> {
    let bytes = blob.get(at..at + 4)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

fn read_u64_le(blob: &[u8], at: usize) -> Option<u64> {
    let bytes = blob.get(at..at + 8)?;
    Some(u64::from_le_bytes(bytes.try_into().ok()?))
}

/// Parses the informational part of a container header.
pub fn parse_header(blob: &[u8]) -> Result<ContainerHeader> {
    if !blob.starts_with(MAGIC) {
        return Err(ConversionError::UndeterminableFormat(
            "missing .MS-LUT signature".to_string(),
        ));
    }
    let version = read_u32_le(blob, VERSION_OFFSET).ok_or_else(|| {
        ConversionError::UndeterminableFormat(format!(
            "container header truncated at {} bytes",
            blob.len()
        ))
    })?;

    let offset_hint = if blob.len() > OFFSET_HINT_MIN_LEN {
        OFFSET_HINT_FIELDS
            .iter()
            .filter_map(|&field| read_u64_le(blob, field))
            .filter_map(|candidate| usize::try_from(candidate).ok())
            .find(|&candidate| candidate > 0 && candidate < blob.len())
    } else {
        None
    };

    Ok(ContainerHeader { version, offset_hint })
}

pub(crate) fn sniff_container(
    blob: &[u8],
    file_name: Option<&str>,
    encoding: PayloadEncoding,
) -> Result<FormatGuess> {
    if blob.len() < MIN_HEADER_LEN {
        return Err(ConversionError::UndeterminableFormat(format!(
            "container of {} bytes is shorter than its header",
            blob.len()
        )));
    }
    let header = parse_header(blob)?;

    let (strategy, geometry) = first_match(CONTAINER_STRATEGIES, blob.len(), encoding).ok_or_else(|| {
        ConversionError::UndeterminableFormat("no container geometry matched".to_string())
    })?;

    debug!(
        version = header.version,
        offset_hint = ?header.offset_hint,
        strategy,
        data_offset = geometry.data_offset,
        "Container geometry resolved"
    );

    // Float records are always stored in RGB order.
    let byte_order = match encoding {
        PayloadEncoding::Float32 => ByteOrder::Rgb,
        PayloadEncoding::Byte => byte_order::detect_from_samples(blob, &geometry)
            .unwrap_or_else(|| byte_order::container_fallback(file_name)),
    };

    Ok(FormatGuess::from_geometry(geometry, byte_order))
}
