use crate::error::{Result, SaveError};
use crate::paths::PATH_DEFAULT_BACKUPS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How and where backups are written
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackupPolicy {
    /// Root under which each application gets its own backup directory
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
    /// Snapshots kept per application; older ones are pruned
    #[serde(default = "default_max_backups")]
    pub max_backups: usize,
    #[serde(default = "default_true")]
    pub compression_enabled: bool,
    /// Globs matched against file names; a match excludes the file
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    #[serde(default)]
    pub auto_backup: bool,
    /// Deepest directory level the discovery walk descends to below a scan root
    #[serde(default = "default_scan_max_depth")]
    pub scan_max_depth: usize,
}

fn default_backup_dir() -> PathBuf {
    PATH_DEFAULT_BACKUPS.clone()
}

fn default_max_backups() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_exclude_patterns() -> Vec<String> {
    ["*.tmp", "*.log", "*.cache", "*.lock"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_scan_max_depth() -> usize {
    8
}

impl Default for BackupPolicy {
    fn default() -> Self {
        BackupPolicy {
            backup_dir: default_backup_dir(),
            max_backups: default_max_backups(),
            compression_enabled: true,
            exclude_patterns: default_exclude_patterns(),
            auto_backup: false,
            scan_max_depth: default_scan_max_depth(),
        }
    }
}

impl BackupPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.max_backups < 1 {
            return Err(SaveError::Validation(
                "max_backups must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Same policy with a different backup root
    pub fn with_backup_dir(&self, dir: PathBuf) -> Self {
        BackupPolicy {
            backup_dir: dir,
            ..self.clone()
        }
    }
}
