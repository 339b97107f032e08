//! Batch conversion module
//!
//! Drives the per-file pipeline over a directory tree: discovery, parallel
//! conversion, grouping by genre, genre folders and the run summary. A failed
//! file or a failed genre copy is recorded and the batch carries on.

mod discovery;
mod runner;
mod organize;
mod summary;
pub mod types;

pub use discovery::{discover, is_candidate_name};
pub use runner::{run, run_batch};
pub use organize::organize_by_genre;
pub use summary::BatchSummary;
pub use types::{BatchConfig, BatchConfigBuilder, BatchReport, FailedFile, OrganizeReport};
