// create_backup: plan, write, stamp, persist, prune

use chrono::{Local, Utc};
use std::fs;
use tracing::{info, warn};

use super::operations::{mirror_entries, plan_entries, prune, write_zip};
use super::pure::snapshot_basename;
use super::types::Snapshot;
use crate::catalog::Catalog;
use crate::config::BackupPolicy;
use crate::error::{Result, SaveError};
use crate::expand::EnvView;

/// Snapshot the save data of `id` under `policy.backup_dir`.
///
/// On success the record's `last_backup`, size and file count are updated
/// and the catalog is saved. Pruning runs afterwards and never fails the
/// backup.
pub fn create_backup(catalog: &mut Catalog, id: &str, policy: &BackupPolicy, env: &EnvView) -> Result<Snapshot> {
    let record = catalog.require(id)?;
    let app_dir = policy.backup_dir.join(&record.id);
    fs::create_dir_all(&app_dir).map_err(|e| SaveError::io(&app_dir, e))?;

    let entries = plan_entries(record, &policy.exclude_patterns, env)?;
    let basename = snapshot_basename(&record.id, &Local::now());

    let path = if policy.compression_enabled {
        let path = app_dir.join(format!("{}.zip", basename));
        write_zip(&path, &entries)?;
        path
    } else {
        let path = app_dir.join(&basename);
        mirror_entries(&path, &entries)?;
        path
    };

    let file_count = entries.len() as u64;
    let total_bytes = entries.iter().map(|e| e.size).sum();
    info!(
        "Backup created for {}: {} ({} files, {} bytes)",
        id,
        path.display(),
        file_count,
        total_bytes
    );

    let record = catalog.require_mut(id)?;
    record.last_backup = Some(Utc::now());
    record.file_count = file_count;
    record.total_size_bytes = total_bytes;
    catalog.save()?;

    let report = prune(&app_dir, id, policy.max_backups);
    if !report.failed.is_empty() {
        warn!("Pruning old backups of {} left {} failures", id, report.failed.len());
    }

    Ok(Snapshot {
        path,
        compressed: policy.compression_enabled,
        file_count,
        total_bytes,
        pruned: report.removed,
    })
}
