//! Batch configuration and report types

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::lut_pipeline::conversions::ConvertedFile;
use crate::lut_pipeline::genre::Genre;

const DEFAULT_INPUT_DIR: &str = "OPPO";
const DEFAULT_OUTPUT_DIR: &str = "converted_oppo_cubes";
const ORGANIZED_DIR_NAME: &str = "organized_luts";
/// Files at or below this size are never LUTs.
const DEFAULT_MIN_FILE_SIZE: u64 = 1000;

/// Configuration for a directory conversion run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory searched recursively for inputs
    pub input_dir: PathBuf,
    /// Directory receiving every `.cube`
    pub output_dir: PathBuf,
    /// Root of the per-genre copies. Defaults to `organized_luts` next to the output directory
    pub organized_dir: Option<PathBuf>,
    /// Inputs must be strictly larger than this many bytes
    pub min_file_size: u64,
    /// Whether converted files are copied into genre folders
    pub organize: bool,
    /// Worker threads, `None` for rayon's default
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            organized_dir: None,
            min_file_size: DEFAULT_MIN_FILE_SIZE,
            organize: true,
            threads: None,
        }
    }
}

impl BatchConfig {
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::default()
    }

    pub fn organized_dir(&self) -> PathBuf {
        self.organized_dir.clone().unwrap_or_else(|| {
            self.output_dir
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(ORGANIZED_DIR_NAME)
        })
    }
}

/// Builder for BatchConfig
#[derive(Default)]
pub struct BatchConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    organized_dir: Option<PathBuf>,
    min_file_size: Option<u64>,
    organize: Option<bool>,
    threads: Option<usize>,
}

impl BatchConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn organized_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.organized_dir = dir;
        self
    }

    pub fn min_file_size(mut self, bytes: u64) -> Self {
        self.min_file_size = Some(bytes);
        self
    }

    pub fn organize(mut self, enable: bool) -> Self {
        self.organize = Some(enable);
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> BatchConfig {
        let default = BatchConfig::default();
        BatchConfig {
            input_dir: self.input_dir.unwrap_or(default.input_dir),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            organized_dir: self.organized_dir.or(default.organized_dir),
            min_file_size: self.min_file_size.unwrap_or(default.min_file_size),
            organize: self.organize.unwrap_or(default.organize),
            threads: self.threads.or(default.threads),
        }
    }
}

/// A file the batch could not convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of copying converted cubes into genre folders.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub copied: usize,
    /// Keyed by the converted cube that was not copied
    pub failed: Vec<FailedFile>,
}

/// Everything a batch run produced.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: BTreeMap<Genre, Vec<ConvertedFile>>,
    pub failed: Vec<FailedFile>,
    /// Inputs not converted because a later input writes the same cube
    pub skipped: Vec<FailedFile>,
    /// Cubes that could not be copied into their genre folder
    pub organize_failures: Vec<FailedFile>,
    /// Set once genre folders have been written
    pub organized_dir: Option<PathBuf>,
}

impl BatchReport {
    pub fn total_converted(&self) -> usize {
        self.converted.values().map(Vec::len).sum()
    }
}
