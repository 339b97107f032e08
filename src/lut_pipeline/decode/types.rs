//! Decoded LUT types

/// One LUT entry with every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

/// A complete table of exactly `grid_size^3` entries.
///
/// Entry `i` sits at `r = i % n`, `g = (i / n) % n`, `b = i / n^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct LutTable {
    grid_size: usize,
    entries: Vec<Rgb>,
}

impl LutTable {
    /// Only the normalizer builds tables, so the length invariant holds.
    pub(crate) fn from_parts(grid_size: usize, entries: Vec<Rgb>) -> Self {
        debug_assert_eq!(entries.len(), grid_size.pow(3));
        Self { grid_size, entries }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Rgb> {
        self.entries
    }
}
