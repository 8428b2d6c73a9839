// Sequential backup of a list of application names

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::Manager;
use super::records::from_candidate;
use crate::archive::create_backup;
use crate::config::BackupPolicy;
use crate::detect::generate_id;
use crate::error::{Result, SaveError};
use crate::expand::{EnvView, expand_strict};
use crate::pcgw::{self, pure::NOT_FOUND_REASON};

/// Aggregate result of a batch; failures are listed, never raised
#[derive(Serialize, Clone, Debug, Default)]
pub struct BatchOutcome {
    pub total_games: usize,
    pub success_count: usize,
    pub error_count: usize,
    /// `"<name>: <reason>"` per failed item
    pub errors: Vec<String>,
    pub backup_path: PathBuf,
}

fn prepare_destination(dest: &str, env: &EnvView) -> Result<PathBuf> {
    let dir = expand_strict(dest, env)?;
    fs::create_dir_all(&dir).map_err(|e| SaveError::io(&dir, e))?;
    Ok(dir)
}

/// Resolve `name`, track it if new and snapshot it; the error is the
/// human-readable reason for the failed item
fn backup_one(manager: &mut Manager, name: &str, policy: &BackupPolicy) -> std::result::Result<PathBuf, String> {
    let candidate = pcgw::lookup(manager.source.as_ref(), name).map_err(|e| e.to_string())?;
    if !candidate.available {
        return Err(candidate.reason.unwrap_or_else(|| NOT_FOUND_REASON.to_string()));
    }

    let id = generate_id(name);
    if !manager.catalog.contains(&id) {
        let record = from_candidate(name, &candidate, &manager.env);
        if !record.save_paths.iter().any(|p| Path::new(p).exists()) {
            return Err(format!("no save location of {} exists on this machine", candidate.name));
        }
        manager.catalog.upsert(record);
        info!("Added {} to the catalog for batch backup", id);
    }

    create_backup(&mut manager.catalog, &id, policy, &manager.env)
        .map(|snapshot| snapshot.path)
        .map_err(|e| e.to_string())
}

/// Back up each name in turn. A name that cannot be resolved or backed up
/// is recorded as failed and the rest are still processed.
pub fn run(manager: &mut Manager, names: &[String], destination: Option<&str>) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        total_games: names.len(),
        backup_path: manager.policy.backup_dir.clone(),
        ..BatchOutcome::default()
    };

    let policy = match destination.map(str::trim).filter(|d| !d.is_empty()) {
        None => manager.policy.clone(),
        Some(dest) => match prepare_destination(dest, &manager.env) {
            Ok(dir) => manager.policy.with_backup_dir(dir),
            Err(e) => {
                warn!("Batch destination unusable: {}", e);
                outcome.error_count = names.len();
                outcome.errors.push(format!("{}: {}", dest, e));
                return outcome;
            }
        },
    };
    outcome.backup_path = policy.backup_dir.clone();

    for name in names {
        match backup_one(manager, name, &policy) {
            Ok(path) => {
                outcome.success_count += 1;
                info!("Batch: backed up {} to {}", name, path.display());
            }
            Err(reason) => {
                warn!("Batch: {} failed: {}", name, reason);
                outcome.error_count += 1;
                outcome.errors.push(format!("{}: {}", name, reason));
            }
        }
    }

    if let Err(e) = manager.catalog.save() {
        warn!("Failed to save catalog after batch: {}", e);
        outcome.errors.push(format!("saving catalog: {}", e));
    }

    info!(
        "Batch complete: {} of {} succeeded",
        outcome.success_count, outcome.total_games
    );
    outcome
}
