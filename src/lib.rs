pub mod logger;
pub mod lut_pipeline;
