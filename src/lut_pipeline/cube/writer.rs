use std::io::Write;
use crate::lut_pipeline::common::error::Result;
use crate::lut_pipeline::decode::types::LutTable;

pub trait CubeWriter {
    fn write_cube(&self, table: &LutTable, title: &str, output: &mut dyn Write) -> Result<()>;
}
