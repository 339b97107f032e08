use std::fmt::Write as _;
use std::io::Write;
use tracing::debug;
use crate::lut_pipeline::common::error::Result;
use crate::lut_pipeline::cube::writer::CubeWriter;
use crate::lut_pipeline::decode::types::LutTable;

/// Bytes per entry line, `0.000000 0.000000 0.000000\n`.
const ENTRY_LINE_LEN: usize = 27;

pub struct StandardCubeWriter;

impl CubeWriter for StandardCubeWriter {
    fn write_cube(&self, table: &LutTable, title: &str, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding cube: size {}, {} entries", table.grid_size(), table.len());
        
        let mut buffer = String::with_capacity(128 + table.len() * ENTRY_LINE_LEN);
        
        // Writing into a String cannot fail.
        let _ = writeln!(buffer, "TITLE \"{}\"", title);
        let _ = writeln!(buffer, "LUT_3D_SIZE {}", table.grid_size());
        buffer.push_str("DOMAIN_MIN 0.0 0.0 0.0\n");
        buffer.push_str("DOMAIN_MAX 1.0 1.0 1.0\n");
        buffer.push('\n');
        
        for entry in table.entries() {
            let _ = writeln!(buffer, "{:.6} {:.6} {:.6}", entry.r, entry.g, entry.b);
        }
        
        output.write_all(buffer.as_bytes())?;
        
        debug!("Cube encoding complete");
        Ok(())
    }
}
