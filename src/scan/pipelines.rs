// Full scan: known applications, root discovery, stats refresh, save

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::operations::{discover, known_application_present};
use super::types::{KnownApplication, ScanOutcome, ScanRoot};
use crate::catalog::Catalog;
use crate::config::BackupPolicy;
use crate::detect::Heuristics;
use crate::expand::{EnvView, expand_strict};

/// Expanded save paths of every catalogued record
fn tracked_paths(catalog: &Catalog, env: &EnvView) -> HashSet<PathBuf> {
    catalog
        .list()
        .into_iter()
        .flat_map(|record| record.save_paths.iter())
        .filter_map(|template| expand_strict(template, env).ok())
        .collect()
}

/// Discover new applications, refresh every record and persist the catalog.
///
/// Never fails as a whole: per-root and per-record problems, including a
/// failed save, end up in [`ScanOutcome::errors`].
pub fn scan(
    catalog: &mut Catalog,
    roots: &[ScanRoot],
    known: &[KnownApplication],
    heuristics: &Heuristics,
    policy: &BackupPolicy,
    env: &EnvView,
) -> ScanOutcome {
    let started = Instant::now();
    let mut outcome = ScanOutcome::default();

    for app in known {
        if catalog.contains(app.id) || !known_application_present(app, env) {
            continue;
        }
        if catalog.insert_discovered(app.to_record()) {
            info!("Found known application: {}", app.name);
            outcome.new_ids.push(app.id.to_string());
        }
    }

    let mut tracked = tracked_paths(catalog, env);
    let mut walked = HashSet::new();
    for root in roots {
        let path = match expand_strict(&root.template, env) {
            Ok(path) => path,
            Err(e) => {
                debug!("Skipping scan root: {}", e);
                continue;
            }
        };
        if !path.is_dir() || !walked.insert(path.clone()) {
            continue;
        }

        let found = discover(&path, root.platform, heuristics, policy.scan_max_depth);
        outcome.errors.extend(found.errors);
        for record in found.records {
            let Some(dir) = record.save_paths.first().map(PathBuf::from) else {
                continue;
            };
            // already tracked under another id, e.g. a known application
            if tracked.contains(&dir) {
                continue;
            }
            let id = record.id.clone();
            let name = record.name.clone();
            if catalog.insert_discovered(record) {
                info!("Detected new application: {} ({})", name, id);
                tracked.insert(dir);
                outcome.new_ids.push(id);
            }
        }
    }

    for id in catalog.ids() {
        match catalog.refresh_stats(&id, &policy.exclude_patterns, env) {
            Ok(()) => outcome.updated += 1,
            Err(e) => outcome.errors.push(format!("{}: {}", id, e)),
        }
    }

    if let Err(e) = catalog.save() {
        warn!("Failed to save catalog after scan: {}", e);
        outcome.errors.push(format!("saving catalog: {}", e));
    }

    outcome.total_games = catalog.len();
    outcome.elapsed_ms = started.elapsed().as_millis() as u64;
    info!(
        "Scan complete: {} applications, {} new, {} errors",
        outcome.total_games,
        outcome.new_ids.len(),
        outcome.errors.len()
    );
    outcome
}
