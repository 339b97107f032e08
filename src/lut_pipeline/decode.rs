//! Payload decoding module
//!
//! Walks a binary payload at the sniffed offset and stride and produces
//! normalized RGB entries.

mod decoder;
mod standard_decoder;
mod byte_payload;
mod float_payload;
pub mod types;


pub use decoder::PayloadDecoder;
pub use standard_decoder::StandardPayloadDecoder;
pub use byte_payload::decode_bytes;
pub use float_payload::decode_floats;
pub use types::{LutTable, Rgb};
