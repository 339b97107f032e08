//! Table normalization
//!
//! Reconciles a decoded entry list with the `grid_size^3` a complete table
//! needs: short tables within the coverage threshold are padded with an
//! identity ramp, long ones are truncated.


use tracing::debug;

use crate::lut_pipeline::common::error::{ConversionError, Result};
use crate::lut_pipeline::decode::types::{LutTable, Rgb};

/// Share of `grid_size^3` that must be recovered from the payload.
pub const DEFAULT_MIN_COVERAGE_PERCENT: u32 = 90;

/// Normalizes with the default 90% coverage threshold.
pub fn normalize(entries: Vec<Rgb>, grid_size: usize) -> Result<LutTable> {
    normalize_with_coverage(entries, grid_size, DEFAULT_MIN_COVERAGE_PERCENT)
}

pub fn normalize_with_coverage(
    mut entries: Vec<Rgb>,
    grid_size: usize,
    min_coverage_percent: u32,
) -> Result<LutTable> {
    if grid_size == 0 {
        return Err(ConversionError::UndeterminableFormat(
            "grid size must be at least 1".to_string(),
        ));
    }
    let expected = grid_size.pow(3);
    let recovered = entries.len();

    if recovered == 0 || recovered * 100 < expected * min_coverage_percent as usize {
        return Err(ConversionError::InsufficientPayload { recovered, expected });
    }

    if recovered > expected {
        entries.truncate(expected);
    } else if recovered < expected {
        debug!(padded = expected - recovered, "Padding table with identity ramp");
        // Ramp entries are always RGB, whatever order the payload was stored in.
        entries.extend((recovered..expected).map(|index| identity_ramp(index, grid_size)));
    }

    Ok(LutTable::from_parts(grid_size, entries))
}

/// Identity value of the grid point at `index`.
pub fn identity_ramp(index: usize, grid_size: usize) -> Rgb {
    let steps = grid_size.saturating_sub(1).max(1) as f64;
    let r = index % grid_size;
    let g = (index / grid_size) % grid_size;
    let b = index / (grid_size * grid_size);
    Rgb::new(r as f64 / steps, g as f64 / steps, b as f64 / steps)
}
