use crate::catalog::{ApplicationRecord, Platform};
use serde::Serialize;

/// A directory tree walked during discovery
#[derive(Clone, Debug, PartialEq)]
pub struct ScanRoot {
    pub platform: Platform,
    /// Placeholder template, expanded strictly before walking
    pub template: String,
}

impl ScanRoot {
    pub fn new(platform: Platform, template: impl Into<String>) -> Self {
        Self {
            platform,
            template: template.into(),
        }
    }
}

/// An application whose save location is known ahead of time
#[derive(Clone, Debug)]
pub struct KnownApplication {
    pub id: &'static str,
    pub name: &'static str,
    pub platform: Platform,
    pub save_paths: &'static [&'static str],
    pub patterns: &'static [&'static str],
    pub publisher: &'static str,
    pub genre: &'static str,
}

impl KnownApplication {
    pub fn to_record(&self) -> ApplicationRecord {
        let mut record = ApplicationRecord::new(self.id, self.name, self.platform);
        record.save_paths = self.save_paths.iter().map(|p| p.to_string()).collect();
        record.file_patterns = self.patterns.iter().map(|p| p.to_string()).collect();
        record.metadata.insert("publisher".into(), self.publisher.into());
        record.metadata.insert("genre".into(), self.genre.into());
        record
    }
}

/// Report of one scan. Never persisted.
#[derive(Serialize, Clone, Debug, Default)]
pub struct ScanOutcome {
    pub total_games: usize,
    /// Ids added by this scan
    pub new_ids: Vec<String>,
    /// Records whose stats were refreshed
    pub updated: usize,
    pub errors: Vec<String>,
    pub elapsed_ms: u64,
}
