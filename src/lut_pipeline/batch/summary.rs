use std::fmt;
use std::path::PathBuf;

use crate::lut_pipeline::batch::types::{BatchReport, FailedFile};
use crate::lut_pipeline::genre::Genre;

/// Printable digest of a [`BatchReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_converted: usize,
    /// Genres by descending file count, ties in genre table order
    pub genres: Vec<(Genre, usize)>,
    pub failed_files: Vec<String>,
    pub skipped_files: Vec<String>,
    /// Cubes missing from their genre folder
    pub organize_failures: Vec<String>,
    pub organized_dir: Option<PathBuf>,
}

fn display_names(files: &[FailedFile]) -> Vec<String> {
    files
        .iter()
        .map(|failed| {
            failed
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| failed.path.display().to_string())
        })
        .collect()
}

impl BatchSummary {
    pub fn from_report(report: &BatchReport) -> Self {
        let mut genres: Vec<(Genre, usize)> = report
            .converted
            .iter()
            .map(|(genre, files)| (*genre, files.len()))
            .collect();
        // Stable sort keeps BTreeMap order among equal counts.
        genres.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            total_converted: report.total_converted(),
            genres,
            failed_files: display_names(&report.failed),
            skipped_files: display_names(&report.skipped),
            organize_failures: display_names(&report.organize_failures),
            organized_dir: report.organized_dir.clone(),
        }
    }

    pub fn failed(&self) -> usize {
        self.failed_files.len()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:=<60}", "")?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{:=<60}", "")?;
        writeln!(f, "Total converted: {}", self.total_converted)?;
        writeln!(f, "Failed: {}", self.failed())?;
        if !self.skipped_files.is_empty() {
            writeln!(f, "Skipped (duplicate output name): {}", self.skipped_files.len())?;
        }
        if let Some(dir) = &self.organized_dir {
            writeln!(f, "\nOrganized folder: {}", dir.display())?;
            if !self.organize_failures.is_empty() {
                writeln!(f, "Not organized: {}", self.organize_failures.join(", "))?;
            }
        }

        writeln!(f, "\nGenre breakdown:")?;
        for (genre, count) in &self.genres {
            writeln!(f, "  {}: {}", genre, count)?;
        }

        if !self.failed_files.is_empty() {
            writeln!(f, "\nFailed files:")?;
            for name in &self.failed_files {
                writeln!(f, "  - {}", name)?;
            }
        }
        Ok(())
    }
}
