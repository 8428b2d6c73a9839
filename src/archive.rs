//! Snapshot creation and retention
//!
//! A snapshot is either a zip archive or a mirrored directory named
//! `<id>_<YYYY-MM-DD_HH-MM-SS>` under `<backup_dir>/<id>/`. After each
//! snapshot the oldest ones beyond `max_backups` are pruned.
//!
//! ## Module Structure
//! - `types.rs`: Snapshot, PruneReport, ArchiveEntry
//! - `pure/`: snapshot and entry naming
//! - `operations/`: entry planning, zip writer, directory mirror, pruning
//! - `pipelines.rs`: create_backup

mod operations;
mod pipelines;
pub mod pure;
mod types;

pub use types::Snapshot;


pub use pipelines::create_backup;
