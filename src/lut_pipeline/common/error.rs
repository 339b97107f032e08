use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),
    
    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),
    
    #[error("Undeterminable LUT format: {0}")]
    UndeterminableFormat(String),
    
    #[error("Insufficient payload: recovered {recovered} of {expected} entries")]
    InsufficientPayload { recovered: usize, expected: usize },
    
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
