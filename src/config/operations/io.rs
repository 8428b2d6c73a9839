use crate::config::types::BackupPolicy;
use crate::error::{Result, SaveError};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the policy, falling back to defaults when the file is missing or unreadable
pub fn load_policy(path: &Path) -> BackupPolicy {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, BackupPolicy>(BufReader::new(file)) {
            Ok(policy) if policy.validate().is_ok() => return policy,
            Ok(_) => tracing::warn!("{} has an out-of-range value, using defaults", path.display()),
            Err(e) => tracing::warn!("Could not parse {}: {}", path.display(), e),
        }
    }

    BackupPolicy::default()
}

/// Rewrite the whole policy file
pub fn save_policy(path: &Path, policy: &BackupPolicy) -> Result<()> {
    policy.validate()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SaveError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| SaveError::io(path, e))?;
    serde_json::to_writer_pretty(file, policy)
        .map_err(|e| SaveError::io(path, std::io::Error::from(e)))?;
    Ok(())
}
