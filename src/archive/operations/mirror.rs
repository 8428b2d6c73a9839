// Uncompressed snapshot: copy entries into a directory tree

use crate::archive::types::ArchiveEntry;
use crate::error::{Result, SaveError};
use std::fs;
use std::path::Path;

pub fn mirror_entries(dest: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| SaveError::io(dest, e))?;

    for entry in entries {
        let target = entry.name.split('/').fold(dest.to_path_buf(), |acc, part| acc.join(part));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| SaveError::io(parent, e))?;
        }
        fs::copy(&entry.source, &target).map_err(|e| SaveError::io(&entry.source, e))?;
    }

    Ok(())
}
