use std::path::Path;

use tracing::{debug, info, warn};

use crate::lut_pipeline::batch::types::{BatchReport, FailedFile, OrganizeReport};

/// Copies every converted cube into `<organized_dir>/<genre>/`.
///
/// A genre folder that cannot be created, or a cube that cannot be copied, is
/// recorded in the returned report and the remaining files are still copied.
pub fn organize_by_genre(report: &BatchReport, organized_dir: &Path) -> OrganizeReport {
    let mut organized = OrganizeReport::default();

    for (genre, files) in &report.converted {
        let genre_dir = organized_dir.join(genre.dir_name());
        if let Err(e) = std::fs::create_dir_all(&genre_dir) {
            warn!(%genre, "Cannot create {}: {}", genre_dir.display(), e);
            organized.failed.extend(files.iter().map(|file| FailedFile {
                path: file.output.clone(),
                reason: format!("{}: {}", genre_dir.display(), e),
            }));
            continue;
        }
        info!(%genre, files = files.len(), "Organizing genre");

        for file in files {
            let Some(name) = file.output.file_name() else {
                continue;
            };
            let destination = genre_dir.join(name);
            match std::fs::copy(&file.output, &destination) {
                Ok(_) => {
                    debug!("Copied {}", destination.display());
                    organized.copied += 1;
                }
                Err(e) => {
                    warn!("Cannot copy {}: {}", destination.display(), e);
                    organized.failed.push(FailedFile {
                        path: file.output.clone(),
                        reason: format!("{}: {}", destination.display(), e),
                    });
                }
            }
        }
    }

    organized
}
