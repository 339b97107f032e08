use crate::lut_pipeline::decode::types::Rgb;
use crate::lut_pipeline::sniff::types::FormatGuess;

const FLOAT_RECORD_LEN: usize = 12;

fn clamp_unit(value: f32) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0) as f64
    }
}

/// Decodes records of three little-endian `f32` values, already in RGB order.
pub fn decode_floats(blob: &[u8], guess: &FormatGuess) -> Vec<Rgb> {
    let payload = blob.get(guess.data_offset..).unwrap_or_default();

    payload
        .chunks_exact(FLOAT_RECORD_LEN)
        .take(guess.entry_count())
        .map(|record| {
            let channel = |i: usize| {
                let bytes = [record[i], record[i + 1], record[i + 2], record[i + 3]];
                clamp_unit(f32::from_le_bytes(bytes))
            };
            Rgb::new(channel(0), channel(4), channel(8))
        })
        .collect()
}
