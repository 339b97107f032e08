use tracing::debug;

use crate::lut_pipeline::cube::types::{ConversionConfig, PayloadEncoding};
use crate::lut_pipeline::decode::byte_payload::decode_bytes;
use crate::lut_pipeline::decode::decoder::PayloadDecoder;
use crate::lut_pipeline::decode::float_payload::decode_floats;
use crate::lut_pipeline::decode::types::Rgb;
use crate::lut_pipeline::sniff::types::FormatGuess;

/// Decoder that dispatches on the configured payload encoding.
pub struct StandardPayloadDecoder;

impl PayloadDecoder for StandardPayloadDecoder {
    fn decode(&self, blob: &[u8], guess: &FormatGuess, config: &ConversionConfig) -> Vec<Rgb> {
        let entries = match config.payload_encoding {
            PayloadEncoding::Byte => decode_bytes(blob, guess),
            PayloadEncoding::Float32 => decode_floats(blob, guess),
        };
        debug!(
            encoding = ?config.payload_encoding,
            decoded = entries.len(),
            expected = guess.entry_count(),
            "Payload decoded"
        );
        entries
    }
}
