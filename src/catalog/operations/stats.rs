// Size / file-count refresh for a record

use crate::catalog::types::ApplicationRecord;
use crate::detect::FileFilter;
use crate::error::Result;
use crate::expand::{EnvView, expand_strict};

use super::files::walk_eligible;

/// Recompute `total_size_bytes` and `file_count` from the files on disk.
///
/// Templates that cannot be expanded and paths that don't exist contribute
/// nothing. The record is only updated when every save path could be walked.
pub fn refresh_stats(record: &mut ApplicationRecord, exclude_patterns: &[String], env: &EnvView) -> Result<()> {
    let filter = FileFilter::new(&record.file_patterns, exclude_patterns);
    let mut total_size = 0u64;
    let mut file_count = 0u64;

    for template in &record.save_paths {
        let root = match expand_strict(template, env) {
            Ok(root) => root,
            Err(e) => {
                tracing::debug!("{}: skipping save path: {}", record.id, e);
                continue;
            }
        };

        for file in walk_eligible(&root, &filter)? {
            total_size += file.size;
            file_count += 1;
        }
    }

    record.total_size_bytes = total_size;
    record.file_count = file_count;
    Ok(())
}
