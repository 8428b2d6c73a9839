//! Save-directory detection
//!
//! Decides whether a directory "looks like" it holds save data by scoring
//! the names of the files directly inside it against a pattern/keyword table.
//!
//! ## Module Structure
//! - `types.rs`: Heuristics table, ListingScore, FileFilter
//! - `pure/`: scoring, glob matching, id/name derivation
//! - `operations.rs`: directory listing

mod operations;
mod pure;
mod types;

use std::path::Path;

pub use types::{FileFilter, Heuristics, SAVE_FILE_PATTERNS};

pub use pure::{generate_id, infer_name};

use operations::list_file_names;
use pure::{is_save_listing, score_listing};

/// Whether the files directly inside `path` look like save data.
///
/// Unreadable directories are reported as "not a save directory".
pub fn looks_like_save_directory(path: &Path, heuristics: &Heuristics) -> bool {
    match list_file_names(path) {
        Ok(names) => is_save_listing(&score_listing(&names, heuristics)),
        Err(e) => {
            tracing::debug!("Cannot list {}: {}", path.display(), e);
            false
        }
    }
}
