use serde::Serialize;
use std::path::PathBuf;

/// One file to put in a snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    /// `/`-separated name inside the snapshot
    pub name: String,
    pub size: u64,
}

/// Result of a successful create_backup
#[derive(Serialize, Clone, Debug)]
pub struct Snapshot {
    pub path: PathBuf,
    pub compressed: bool,
    pub file_count: u64,
    pub total_bytes: u64,
    /// Older snapshots removed by retention
    pub pruned: Vec<PathBuf>,
}

#[derive(Serialize, Clone, Debug, Default)]
pub struct PruneReport {
    pub kept: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub failed: Vec<String>,
}
