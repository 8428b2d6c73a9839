// Decide which files go into a snapshot and under which names

use crate::archive::pure::{entry_name, entry_prefix};
use crate::archive::types::ArchiveEntry;
use crate::catalog::{ApplicationRecord, walk_eligible};
use crate::detect::FileFilter;
use crate::error::Result;
use crate::expand::{EnvView, expand_strict};

/// Every eligible file under the record's save paths, named for the snapshot.
///
/// Save paths that cannot be expanded or don't exist contribute nothing.
pub fn plan_entries(record: &ApplicationRecord, exclude_patterns: &[String], env: &EnvView) -> Result<Vec<ArchiveEntry>> {
    let filter = FileFilter::new(&record.file_patterns, exclude_patterns);
    let root_count = record.save_paths.len();
    let mut entries = Vec::new();

    for (index, template) in record.save_paths.iter().enumerate() {
        let root = match expand_strict(template, env) {
            Ok(root) => root,
            Err(e) => {
                tracing::debug!("{}: not archiving save path: {}", record.id, e);
                continue;
            }
        };
        let prefix = entry_prefix(index, &root, root_count);

        for file in walk_eligible(&root, &filter)? {
            entries.push(ArchiveEntry {
                name: entry_name(prefix.as_deref(), &file.relative),
                source: file.path,
                size: file.size,
            });
        }
    }

    Ok(entries)
}
