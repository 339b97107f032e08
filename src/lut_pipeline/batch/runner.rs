use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::lut_pipeline::{
    batch::discovery::discover,
    batch::organize::organize_by_genre,
    batch::types::{BatchConfig, BatchReport, FailedFile},
    common::error::{ConversionError, Result},
    conversions::{cube_file_name, BinToCubePipeline, ConvertedFile},
    cube::CubeWriter,
    decode::PayloadDecoder,
};

enum FileResult {
    Converted(ConvertedFile),
    Failed(String),
    Skipped(String),
}

/// Maps each output name to the last input in `files` that produces it.
fn last_claims(files: &[PathBuf]) -> HashMap<String, &Path> {
    files
        .iter()
        .filter_map(|path| cube_file_name(path).map(|name| (name, path.as_path())))
        .collect()
}

/// Converts `files` into `output_dir`, writing each cube as soon as it is
/// converted.
///
/// When several inputs map to the same `<stem>.cube`, only the last one in
/// `files` is converted and the others are reported as skipped.
#[instrument(skip_all, fields(files = files.len()))]
pub fn run_batch<D, W>(
    pipeline: &BinToCubePipeline<D, W>,
    files: &[PathBuf],
    output_dir: &Path,
) -> Result<BatchReport>
where
    D: PayloadDecoder + Sync,
    W: CubeWriter + Sync,
{
    std::fs::create_dir_all(output_dir).map_err(|e| {
        ConversionError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
    })?;

    let claims = last_claims(files);

    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let winner = cube_file_name(path)
                .and_then(|name| claims.get(&name).map(|winner| (name, *winner)))
                .filter(|(_, winner)| *winner != path.as_path());
            let result = match winner {
                Some((name, winner)) => FileResult::Skipped(format!(
                    "{} is also produced by {}",
                    name,
                    winner.display()
                )),
                None => match pipeline.convert_file(path, output_dir) {
                    Ok(converted) => FileResult::Converted(converted),
                    Err(e) => FileResult::Failed(e.to_string()),
                },
            };
            (path, result)
        })
        .collect();

    let mut report = BatchReport::default();
    for (path, result) in results {
        match result {
            FileResult::Converted(converted) => {
                info!(
                    output = %converted.output.display(),
                    genre = %converted.genre,
                    "Converted"
                );
                report.converted.entry(converted.genre).or_default().push(converted);
            }
            FileResult::Failed(reason) => {
                warn!(input = %path.display(), "Conversion failed: {}", reason);
                report.failed.push(FailedFile { path: path.clone(), reason });
            }
            FileResult::Skipped(reason) => {
                warn!(input = %path.display(), "Skipped: {}", reason);
                report.skipped.push(FailedFile { path: path.clone(), reason });
            }
        }
    }

    Ok(report)
}

/// Runs a whole batch as described by `config`.
///
/// Copy failures while organizing are recorded in the report and never fail
/// the run.
pub fn run<D, W>(pipeline: &BinToCubePipeline<D, W>, config: &BatchConfig) -> Result<BatchReport>
where
    D: PayloadDecoder + Sync,
    W: CubeWriter + Sync,
{
    let files = discover(&config.input_dir, config.min_file_size);
    info!("Found {} files to process", files.len());

    let convert = || run_batch(pipeline, &files, &config.output_dir);
    let mut report = match config.threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(convert)?,
            Err(e) => {
                warn!("Falling back to the global thread pool: {}", e);
                convert()?
            }
        },
        None => convert()?,
    };

    if config.organize {
        let organized_dir = config.organized_dir();
        let organized = organize_by_genre(&report, &organized_dir);
        info!(copied = organized.copied, failed = organized.failed.len(), "Organized by genre");
        report.organize_failures = organized.failed;
        report.organized_dir = Some(organized_dir);
    }

    Ok(report)
}
