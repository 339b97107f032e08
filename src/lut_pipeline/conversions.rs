//! Pipeline conversions module
//!
//! This module contains the per-file orchestration from binary LUT to cube.

mod bin_to_cube;
mod types;


pub use bin_to_cube::BinToCubePipeline;
pub use bin_to_cube::{cube_file_name, CUBE_EXTENSION};
pub use types::{ConversionOutcome, ConvertedFile, OutcomeKind, RenderedFile};
