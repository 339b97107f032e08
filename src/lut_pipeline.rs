//! LUT conversion pipeline module
//!
//! This module turns vendor `.MS-LUT` containers and headerless LUT dumps into
//! `.cube` text tables, with separate modules for format sniffing, payload
//! decoding, table normalization, cube writing, genre classification and
//! batch orchestration.

pub mod common;
pub mod sniff;
pub mod decode;
pub mod normalize;
pub mod cube;
pub mod genre;
pub mod conversions;
pub mod batch;

pub use common::{
    ConversionError,
    Result,
};

pub use sniff::{
    sniff,
    sniff_with_encoding,
    ByteOrder,
    ContainerHeader,
    FormatGuess,
    Sniffed,
    MAGIC as MAGIC_SIGNATURE,
};

pub use decode::{
    LutTable,
    PayloadDecoder,
    Rgb,
    StandardPayloadDecoder,
};

pub use normalize::normalize;

pub use cube::{
    ConversionConfig,
    ConversionConfigBuilder,
    CubeWriter,
    PayloadEncoding,
    StandardCubeWriter,
};

pub use genre::{classify, Genre};

pub use conversions::{
    BinToCubePipeline,
    ConversionOutcome,
    ConvertedFile,
    OutcomeKind,
    RenderedFile,
};

pub use batch::{
    BatchConfig,
    BatchConfigBuilder,
    BatchReport,
    BatchSummary,
    FailedFile,
};
