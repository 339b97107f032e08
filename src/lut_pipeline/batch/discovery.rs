use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::lut_pipeline::conversions::CUBE_EXTENSION;

/// Inputs are `.bin` files or files without any extension-like dot.
pub fn is_candidate_name(name: &str) -> bool {
    if name.ends_with(&format!(".{}", CUBE_EXTENSION)) {
        return false;
    }
    name.ends_with(".bin") || !name.contains('.')
}

/// Recursively collects candidate LUT files larger than `min_file_size`,
/// sorted by path.
pub fn discover<P: AsRef<Path>>(input_dir: P, min_file_size: u64) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(input_dir.as_ref())
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_str().is_some_and(is_candidate_name))
        .filter(|entry| {
            entry
                .metadata()
                .map(|meta| meta.len() > min_file_size)
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!("Discovered {} candidate files", files.len());
    files
}
