//! Catalog of tracked applications
//!
//! Owns every ApplicationRecord for the lifetime of the process and persists
//! them as one JSON document. Discovery may only add ids that are not yet
//! present; existing records (and the user edits in them) are never replaced
//! by a scan.

mod operations;
mod types;

use crate::error::{Result, SaveError};
use crate::expand::{EnvView, expand_strict};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use types::{ApplicationRecord, PathValidation, Platform};

pub use operations::walk_eligible;
use operations::{load_catalog, refresh_stats, save_catalog};

pub struct Catalog {
    path: PathBuf,
    records: BTreeMap<String, ApplicationRecord>,
}

impl Catalog {
    /// Load the catalog stored at `path`; a missing file yields an empty catalog
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut catalog = Self::empty(path);
        catalog.records = load_catalog(&catalog.path)?;
        Ok(catalog)
    }

    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        save_catalog(&self.path, &self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ApplicationRecord> {
        self.records.get(id)
    }

    pub fn require(&self, id: &str) -> Result<&ApplicationRecord> {
        self.records
            .get(id)
            .ok_or_else(|| SaveError::NotFound(id.to_string()))
    }

    pub fn require_mut(&mut self, id: &str) -> Result<&mut ApplicationRecord> {
        self.records
            .get_mut(id)
            .ok_or_else(|| SaveError::NotFound(id.to_string()))
    }

    /// Insert or replace; returns the record previously stored under the id
    pub fn upsert(&mut self, record: ApplicationRecord) -> Option<ApplicationRecord> {
        self.records.insert(record.id.clone(), record)
    }

    /// Merge rule for discovery: only ids not yet catalogued are inserted.
    /// Returns whether the record was added.
    pub fn insert_discovered(&mut self, record: ApplicationRecord) -> bool {
        if self.records.contains_key(&record.id) {
            return false;
        }
        self.records.insert(record.id.clone(), record);
        true
    }

    pub fn remove(&mut self, id: &str) -> Result<ApplicationRecord> {
        self.records
            .remove(id)
            .ok_or_else(|| SaveError::NotFound(id.to_string()))
    }

    /// All records, ordered by name ascending
    pub fn list(&self) -> Vec<&ApplicationRecord> {
        let mut records: Vec<&ApplicationRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        records
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    /// Recompute size and file count of one record
    pub fn refresh_stats(&mut self, id: &str, exclude_patterns: &[String], env: &EnvView) -> Result<()> {
        let record = self.require_mut(id)?;
        refresh_stats(record, exclude_patterns, env)
    }

    /// Split a record's save paths into those that exist and those that don't.
    /// Templates that cannot be expanded are reported verbatim as invalid.
    pub fn validate_paths(&self, id: &str, env: &EnvView) -> Result<PathValidation> {
        let record = self.require(id)?;
        let mut result = PathValidation::default();

        for template in &record.save_paths {
            match expand_strict(template, env) {
                Ok(path) if path.exists() => result.valid.push(path.to_string_lossy().into_owned()),
                Ok(path) => result.invalid.push(path.to_string_lossy().into_owned()),
                Err(_) => result.invalid.push(template.clone()),
            }
        }

        Ok(result)
    }
}
