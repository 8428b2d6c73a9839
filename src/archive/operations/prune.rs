// Retention: keep the newest snapshots of one application

use crate::archive::types::PruneReport;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{info, warn};

fn remove_entry(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Keep the `max_backups` most recently modified entries in `app_dir`
/// whose name contains `id`, and delete the rest.
///
/// Never fails: unreadable directories and failed removals are logged and
/// reported. Entries with equal modification times keep directory order.
pub fn prune(app_dir: &Path, id: &str, max_backups: usize) -> PruneReport {
    let mut report = PruneReport::default();

    let read_dir = match fs::read_dir(app_dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            warn!("Cannot list backups in {}: {}", app_dir.display(), e);
            report.failed.push(format!("{}: {}", app_dir.display(), e));
            return report;
        }
    };

    let mut snapshots: Vec<(PathBuf, SystemTime)> = read_dir
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(id))
        .filter_map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok()?;
            Some((entry.path(), modified))
        })
        .collect();

    snapshots.sort_by(|a, b| b.1.cmp(&a.1));

    for (index, (path, _)) in snapshots.into_iter().enumerate() {
        if index < max_backups {
            report.kept.push(path);
            continue;
        }
        match remove_entry(&path) {
            Ok(()) => {
                info!("Removed old backup {}", path.display());
                report.removed.push(path);
            }
            Err(e) => {
                warn!("Failed to remove old backup {}: {}", path.display(), e);
                report.failed.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    report
}
