//! Single-owner context for every public operation
//!
//! `Manager` owns the catalog, the backup policy, the knowledge source and
//! the environment snapshot. All mutating operations take `&mut self`, so a
//! caller can only run them one at a time.

mod batch;
mod records;
#[cfg(test)]
mod tests;

pub use batch::BatchOutcome;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::archive::{self, Snapshot};
use crate::catalog::{ApplicationRecord, Catalog, PathValidation, Platform};
use crate::config::{BackupPolicy, load_policy, save_policy};
use crate::detect::{Heuristics, SAVE_FILE_PATTERNS, generate_id};
use crate::error::{Result, SaveError};
use crate::expand::{EnvView, expand_strict};
use crate::pcgw::{self, KnowledgeSource, SearchResult, Selection};
use crate::scan::{self, ScanOutcome, ScanRoot};

pub const SETTINGS_FILE: &str = "settings.json";
pub const CATALOG_FILE: &str = "catalog.json";

pub struct Manager {
    catalog: Catalog,
    policy: BackupPolicy,
    policy_path: PathBuf,
    source: Box<dyn KnowledgeSource>,
    env: EnvView,
    heuristics: Heuristics,
    scan_roots: Vec<ScanRoot>,
}

impl Manager {
    pub fn new(
        catalog: Catalog,
        policy: BackupPolicy,
        policy_path: PathBuf,
        source: Box<dyn KnowledgeSource>,
        env: EnvView,
    ) -> Self {
        Self {
            catalog,
            policy,
            policy_path,
            source,
            env,
            heuristics: Heuristics::default(),
            scan_roots: Vec::new(),
        }
    }

    /// Load settings and catalog from `data_dir` and use the default scan roots
    pub fn open(data_dir: &Path, source: Box<dyn KnowledgeSource>, env: EnvView) -> Result<Self> {
        let policy_path = data_dir.join(SETTINGS_FILE);
        let policy = load_policy(&policy_path);
        let catalog = Catalog::open(data_dir.join(CATALOG_FILE))?;
        if catalog.is_empty() {
            info!("No applications tracked yet; run a scan to discover some");
        } else {
            info!(
                "Loaded {} applications from {}",
                catalog.len(),
                catalog.path().display()
            );
        }
        Ok(Self::new(catalog, policy, policy_path, source, env).with_scan_roots(scan::default_scan_roots()))
    }

    pub fn with_scan_roots(mut self, roots: Vec<ScanRoot>) -> Self {
        self.scan_roots = roots;
        self
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &BackupPolicy {
        &self.policy
    }

    pub fn scan_all(&mut self) -> ScanOutcome {
        scan::scan(
            &mut self.catalog,
            &self.scan_roots,
            scan::known_applications(),
            &self.heuristics,
            &self.policy,
            &self.env,
        )
    }

    pub fn list_applications(&self) -> Vec<&ApplicationRecord> {
        self.catalog.list()
    }

    /// One record with freshly computed stats
    pub fn show(&mut self, id: &str) -> Result<&ApplicationRecord> {
        self.catalog.require(id)?;
        if let Err(e) = self.catalog.refresh_stats(id, &self.policy.exclude_patterns, &self.env) {
            warn!("Could not refresh stats of {}: {}", id, e);
        }
        self.catalog.require(id)
    }

    pub fn create_backup(&mut self, id: &str) -> Result<Snapshot> {
        archive::create_backup(&mut self.catalog, id, &self.policy, &self.env)
    }

    /// Track a user-supplied save directory.
    ///
    /// The path must exist; otherwise nothing is changed. Empty `patterns`
    /// fall back to the default save-file globs.
    pub fn add_custom_application(&mut self, name: &str, path: &str, patterns: &[String]) -> Result<&ApplicationRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SaveError::Validation("application name is empty".to_string()));
        }
        let expanded = expand_strict(path.trim(), &self.env)?;
        if !expanded.exists() {
            return Err(SaveError::Validation(format!(
                "save path does not exist: {}",
                expanded.display()
            )));
        }

        let location = expanded.to_string_lossy().into_owned();
        let mut record = ApplicationRecord::new(generate_id(name), name, Platform::Custom);
        record.save_paths = vec![location.clone()];
        record.custom_paths = vec![location];
        record.file_patterns = if patterns.is_empty() {
            SAVE_FILE_PATTERNS.iter().map(|p| p.to_string()).collect()
        } else {
            patterns.to_vec()
        };

        let id = self.commit(record)?;
        info!("Added custom application {}", id);
        self.catalog.require(&id)
    }

    pub fn search_knowledge_source(&self, name: &str) -> Result<Vec<SearchResult>> {
        pcgw::search(self.source.as_ref(), name)
    }

    pub fn search_by_steam_app_id(&self, app_id: &str) -> Result<SearchResult> {
        pcgw::search_by_steam_app_id(self.source.as_ref(), app_id)
    }

    /// Track an application from a knowledge-source candidate and/or a
    /// custom path. At least one of its save paths must exist.
    pub fn add_from_knowledge_source(&mut self, selection: &Selection) -> Result<&ApplicationRecord> {
        let record = records::from_selection(selection, &self.env)?;

        let present = record
            .save_paths
            .iter()
            .any(|p| Path::new(p).exists());
        if !present {
            return Err(SaveError::Validation(format!(
                "none of the save paths of {} exist on this machine",
                record.name
            )));
        }

        let id = self.commit(record)?;
        info!("Added {} from PCGamingWiki", id);
        self.catalog.require(&id)
    }

    pub fn backup_root(&self) -> &Path {
        &self.policy.backup_dir
    }

    /// Point backups at `path`; the directory is created and must be writable
    pub fn set_backup_root(&mut self, path: &str) -> Result<&Path> {
        let dir = expand_strict(path.trim(), &self.env)?;
        fs::create_dir_all(&dir).map_err(|e| SaveError::io(&dir, e))?;

        let marker = dir.join(".test_write");
        fs::write(&marker, b"").map_err(|e| SaveError::io(&marker, e))?;
        fs::remove_file(&marker).map_err(|e| SaveError::io(&marker, e))?;

        let policy = self.policy.with_backup_dir(dir);
        save_policy(&self.policy_path, &policy)?;
        self.policy = policy;
        info!("Backup root set to {}", self.policy.backup_dir.display());
        Ok(&self.policy.backup_dir)
    }

    pub fn validate_paths(&self, id: &str) -> Result<PathValidation> {
        self.catalog.validate_paths(id, &self.env)
    }

    /// Stop tracking `id`. Existing backups are left on disk.
    pub fn remove_application(&mut self, id: &str) -> Result<ApplicationRecord> {
        let removed = self.catalog.remove(id)?;
        self.catalog.save()?;
        info!("Removed {}", id);
        Ok(removed)
    }

    /// Replace the policy; it is validated and persisted first
    pub fn update_policy(&mut self, policy: BackupPolicy) -> Result<&BackupPolicy> {
        save_policy(&self.policy_path, &policy)?;
        self.policy = policy;
        info!("Backup policy updated");
        Ok(&self.policy)
    }

    pub fn batch_create_backups(&mut self, names: &[String], destination: Option<&str>) -> BatchOutcome {
        batch::run(self, names, destination)
    }

    /// Insert or replace a record, keeping the previous record's custom
    /// paths, then refresh its stats and save.
    fn commit(&mut self, mut record: ApplicationRecord) -> Result<String> {
        if let Some(previous) = self.catalog.get(&record.id) {
            record.absorb_custom_paths(previous);
            record.last_backup = previous.last_backup;
        }
        let id = record.id.clone();
        self.catalog.upsert(record);

        if let Err(e) = self.catalog.refresh_stats(&id, &self.policy.exclude_patterns, &self.env) {
            warn!("Could not compute stats of {}: {}", id, e);
        }
        self.catalog.save()?;
        Ok(id)
    }
}
