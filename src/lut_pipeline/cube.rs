//! Cube writing module
//!
//! This module serializes normalized tables as `.cube` text and holds the
//! conversion configuration.

mod writer;
mod standard_cube_writer;
pub mod types;


pub use writer::CubeWriter;
pub use standard_cube_writer::StandardCubeWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, PayloadEncoding};
