// Walk a save path and pick out backup-eligible files

use crate::detect::FileFilter;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file selected for backup
#[derive(Clone, Debug, PartialEq)]
pub struct EligibleFile {
    pub path: PathBuf,
    /// Path relative to the save-path root it was found under
    pub relative: PathBuf,
    pub size: u64,
}

/// Every file under `root` whose name passes `filter`, in file-name order.
///
/// A missing root yields nothing. Unreadable entries below the root are
/// skipped; failing to read the root itself is an error.
pub fn walk_eligible(root: &Path, filter: &FileFilter) -> Result<Vec<EligibleFile>> {
    let mut files = Vec::new();
    if !root.exists() {
        return Ok(files);
    }

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !filter.accepts(&name) {
            continue;
        }

        // symlinks are not followed into, so resolve their target here
        // and keep only regular files
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let relative = match entry.path().strip_prefix(root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            // the root is itself a file
            _ => PathBuf::from(entry.file_name()),
        };

        files.push(EligibleFile {
            path: entry.path().to_path_buf(),
            relative,
            size: metadata.len(),
        });
    }

    Ok(files)
}
