use crate::lut_pipeline::cube::types::ConversionConfig;
use crate::lut_pipeline::decode::types::Rgb;
use crate::lut_pipeline::sniff::types::FormatGuess;

pub trait PayloadDecoder {
    fn decode(&self, blob: &[u8], guess: &FormatGuess, config: &ConversionConfig) -> Vec<Rgb>;
}
