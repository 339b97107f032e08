use std::path::{Path, PathBuf};

use crate::lut_pipeline::common::error::{ConversionError, Result};

use crate::lut_pipeline::decode::types::LutTable;
use crate::lut_pipeline::genre::Genre;
use crate::lut_pipeline::sniff::types::FormatGuess;

/// What the pipeline did with one input.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeKind {
    /// Input was already `.cube` text and was copied unchanged
    CopiedText,
    /// Input was decoded from binary
    Converted { guess: FormatGuess, table: LutTable },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub genre: Genre,
    pub kind: OutcomeKind,
}

impl ConversionOutcome {
    pub fn table(&self) -> Option<&LutTable> {
        match &self.kind {
            OutcomeKind::Converted { table, .. } => Some(table),
            OutcomeKind::CopiedText => None,
        }
    }
}

/// A converted file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub genre: Genre,
}

/// A conversion rendered in memory, not yet on disk.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub source: PathBuf,
    /// `<stem>.cube`
    pub output_name: String,
    pub contents: Vec<u8>,
    pub outcome: ConversionOutcome,
}

impl RenderedFile {
    /// Writes the rendered cube into `output_dir`.
    pub fn write_to<P: AsRef<Path>>(self, output_dir: P) -> Result<ConvertedFile> {
        let output = output_dir.as_ref().join(&self.output_name);
        let _span = tracing::info_span!("write_output_file").entered();
        std::fs::write(&output, &self.contents).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output.display(), e))
        })?;

        Ok(ConvertedFile {
            source: self.source,
            output,
            genre: self.outcome.genre,
        })
    }
}
