//! Discovery of save directories
//!
//! A scan first adds well-known applications whose save paths exist, then
//! walks the per-platform roots and turns every directory the classifier
//! accepts into a new record. Existing records are never replaced. Finally
//! the stats of every record are refreshed and the catalog is saved.

mod operations;
mod pipelines;
pub mod pure;
mod types;

pub use types::{KnownApplication, ScanOutcome, ScanRoot};

pub use pipelines::scan;

use crate::paths::steam_userdata_dir;
use pure::{KNOWN_APPLICATIONS, PLATFORM_ROOTS};

/// Built-in roots, plus Steam's userdata directory when Steam is installed
pub fn default_scan_roots() -> Vec<ScanRoot> {
    let mut roots: Vec<ScanRoot> = PLATFORM_ROOTS
        .iter()
        .flat_map(|(platform, templates)| {
            templates.iter().map(|template| ScanRoot::new(*platform, *template))
        })
        .collect();

    if let Some(userdata) = steam_userdata_dir() {
        tracing::debug!("Steam userdata found at {}", userdata.display());
        roots.push(ScanRoot::new(
            crate::catalog::Platform::Steam,
            userdata.to_string_lossy(),
        ));
    }

    roots
}

pub fn known_applications() -> &'static [KnownApplication] {
    KNOWN_APPLICATIONS
}
