use tracing::debug;

use crate::lut_pipeline::common::error::{ConversionError, Result};
use crate::lut_pipeline::sniff::byte_order;
use crate::lut_pipeline::sniff::strategies::{first_match, RAW_STRATEGIES};
use crate::lut_pipeline::sniff::types::{ByteOrder, FormatGuess, PayloadEncoding};

/// Sniffs a blob without a container signature as a headerless sample dump.
pub(crate) fn sniff_raw(
    blob: &[u8],
    file_name: Option<&str>,
    encoding: PayloadEncoding,
) -> Result<FormatGuess> {
    let (strategy, geometry) = first_match(RAW_STRATEGIES, blob.len(), encoding).ok_or_else(|| {
        ConversionError::UndeterminableFormat(format!(
            "{} bytes is too small to hold a LUT",
            blob.len()
        ))
    })?;

    debug!(strategy, grid_size = geometry.grid_size, "Raw dump geometry resolved");

    let byte_order = match encoding {
        PayloadEncoding::Float32 => ByteOrder::Rgb,
        PayloadEncoding::Byte => byte_order::raw_default(file_name),
    };
    Ok(FormatGuess::from_geometry(geometry, byte_order))
}
