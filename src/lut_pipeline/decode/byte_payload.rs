use crate::lut_pipeline::decode::types::Rgb;
use crate::lut_pipeline::sniff::types::FormatGuess;

/// Decodes 8-bit records of `channel_count` bytes, using the first three bytes
/// of each. A trailing record needs only three bytes; anything shorter ends the
/// table early.
pub fn decode_bytes(blob: &[u8], guess: &FormatGuess) -> Vec<Rgb> {
    let payload = blob.get(guess.data_offset..).unwrap_or_default();

    payload
        .chunks(guess.channel_count.max(3))
        .take(guess.entry_count())
        .map_while(|record| record.get(..3))
        .map(|record| {
            let [r, g, b] = guess.byte_order.to_rgb([record[0], record[1], record[2]]);
            Rgb::from_u8(r, g, b)
        })
        .collect()
}
