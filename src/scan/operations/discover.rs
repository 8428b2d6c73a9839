// Walk one root and classify every directory below it

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::catalog::{ApplicationRecord, Platform};
use crate::detect::{Heuristics, SAVE_FILE_PATTERNS, generate_id, infer_name, looks_like_save_directory};
use crate::expand::{EnvView, expand_strict};
use crate::scan::types::KnownApplication;

/// Records found under one root and the errors met along the way
#[derive(Debug, Default)]
pub struct Discovery {
    pub records: Vec<ApplicationRecord>,
    pub errors: Vec<String>,
}

fn record_for(dir: &Path, platform: Platform) -> ApplicationRecord {
    let path = dir.to_string_lossy().into_owned();
    let mut record = ApplicationRecord::new(generate_id(&path), infer_name(dir), platform);
    record.save_paths = vec![path];
    record.file_patterns = SAVE_FILE_PATTERNS.iter().map(|p| p.to_string()).collect();
    record
}

/// Directories below `root` (not `root` itself, at most `max_depth` levels
/// down) that look like save directories.
///
/// The subtree of an accepted directory is not examined further. Unreadable
/// entries below the root are skipped; an unreadable root is reported.
pub fn discover(root: &Path, platform: Platform, heuristics: &Heuristics, max_depth: usize) -> Discovery {
    let mut found = Discovery::default();
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                found.errors.push(format!("{}: {}", root.display(), e));
                break;
            }
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if looks_like_save_directory(entry.path(), heuristics) {
            found.records.push(record_for(entry.path(), platform));
            walker.skip_current_dir();
        }
    }

    found
}

/// Whether at least one of the application's save paths exists
pub fn known_application_present(app: &KnownApplication, env: &EnvView) -> bool {
    app.save_paths
        .iter()
        .filter_map(|template| expand_strict(template, env).ok())
        .any(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn save_dir(root: &Path, rel: &str) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("slot0.sav"), b"x").unwrap();
    }

    #[test]
    fn finds_save_directories_below_root() {
        let root = TempDir::new().unwrap();
        save_dir(root.path(), "Hollow_Knight");
        save_dir(root.path(), "Studio/Some-Game");
        fs::create_dir_all(root.path().join("Empty")).unwrap();
        fs::write(root.path().join("root.sav"), b"x").unwrap();

        let found = discover(root.path(), Platform::Steam, &Heuristics::default(), 8);
        let ids: Vec<&str> = found.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["hollow_knight", "some-game"]);
        assert_eq!(found.records[1].name, "Some Game");
        assert_eq!(found.records[0].platform, Platform::Steam);
        assert!(found.errors.is_empty());
    }

    #[test]
    fn accepted_directory_subtree_is_not_split() {
        let root = TempDir::new().unwrap();
        save_dir(root.path(), "Game");
        save_dir(root.path(), "Game/backup");

        let found = discover(root.path(), Platform::Gog, &Heuristics::default(), 8);
        assert_eq!(found.records.len(), 1);
        assert_eq!(found.records[0].id, "game");
    }

    #[test]
    fn depth_limit_is_respected() {
        let root = TempDir::new().unwrap();
        save_dir(root.path(), "a/b/c/Deep");

        assert!(discover(root.path(), Platform::Epic, &Heuristics::default(), 3).records.is_empty());
        assert_eq!(discover(root.path(), Platform::Epic, &Heuristics::default(), 4).records.len(), 1);
    }

    #[test]
    fn missing_root_is_reported() {
        let root = TempDir::new().unwrap();
        let found = discover(&root.path().join("nope"), Platform::Steam, &Heuristics::default(), 8);
        assert!(found.records.is_empty());
        assert_eq!(found.errors.len(), 1);
    }
}
