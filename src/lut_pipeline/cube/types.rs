//! LUT conversion configuration types

use crate::lut_pipeline::normalize::DEFAULT_MIN_COVERAGE_PERCENT;

pub use crate::lut_pipeline::sniff::types::PayloadEncoding;

/// Configuration for `.MS-LUT` to `.cube` conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Sample encoding of the binary payload
    pub payload_encoding: PayloadEncoding,
    /// Minimum percentage of `grid_size^3` entries the payload must yield
    pub min_coverage_percent: u32,
    /// Whether inputs that are already `.cube` text are copied through.
    /// When disabled they are rejected as undeterminable.
    pub copy_text_luts: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            payload_encoding: PayloadEncoding::Byte,
            min_coverage_percent: DEFAULT_MIN_COVERAGE_PERCENT,
            copy_text_luts: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    payload_encoding: Option<PayloadEncoding>,
    min_coverage_percent: Option<u32>,
    copy_text_luts: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn payload_encoding(mut self, encoding: PayloadEncoding) -> Self {
        self.payload_encoding = Some(encoding);
        self
    }
    
    pub fn min_coverage_percent(mut self, percent: u32) -> Self {
        self.min_coverage_percent = Some(percent.min(100));
        self
    }
    
    pub fn copy_text_luts(mut self, enable: bool) -> Self {
        self.copy_text_luts = Some(enable);
        self
    }
    
    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            payload_encoding: self.payload_encoding.unwrap_or(default.payload_encoding),
            min_coverage_percent: self.min_coverage_percent.unwrap_or(default.min_coverage_percent),
            copy_text_luts: self.copy_text_luts.unwrap_or(default.copy_text_luts),
        }
    }
}
