//! Backup policy stored as `settings.json` in the data directory

mod operations;
mod types;

pub use types::BackupPolicy;

pub use operations::{load_policy, save_policy};
