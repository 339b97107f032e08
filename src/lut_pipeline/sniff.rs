//! Format sniffing module
//!
//! Decides whether a blob is already a `.cube` text table, a `.MS-LUT`
//! container, or a headerless dump, and recovers the LUT geometry and channel
//! order for the binary cases.

mod text;
mod container;
mod raw_dump;
mod byte_order;
pub mod strategies;
pub mod types;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::lut_pipeline::common::error::Result;

pub use container::parse_header;
pub use types::{ByteOrder, ContainerHeader, FormatGuess, Geometry, PayloadEncoding, Sniffed, MAGIC};

/// Inspects `blob` as an 8-bit LUT and infers how its payload is laid out.
pub fn sniff(blob: &[u8], file_name: Option<&str>) -> Result<Sniffed> {
    sniff_with_encoding(blob, file_name, PayloadEncoding::Byte)
}

/// Inspects `blob` and infers how its payload is laid out, assuming samples
/// stored as `encoding`.
///
/// The text check always runs first so that `.cube` files misnamed as `.bin`
/// are copied rather than decoded as garbage.
pub fn sniff_with_encoding(
    blob: &[u8],
    file_name: Option<&str>,
    encoding: PayloadEncoding,
) -> Result<Sniffed> {
    if text::is_text_lut(blob) {
        debug!("Blob is already a textual LUT");
        return Ok(Sniffed::AlreadyText);
    }

    let guess = if blob.starts_with(MAGIC) {
        container::sniff_container(blob, file_name, encoding)?
    } else {
        raw_dump::sniff_raw(blob, file_name, encoding)?
    };

    debug!(
        grid_size = guess.grid_size,
        channel_count = guess.channel_count,
        data_offset = guess.data_offset,
        byte_order = ?guess.byte_order,
        "Format sniffed"
    );
    Ok(Sniffed::Binary(guess))
}
