//! Atomic filesystem operations for snapshots

mod compress;
mod mirror;
mod plan;
mod prune;

pub use compress::write_zip;
pub use mirror::mirror_entries;
pub use plan::plan_entries;
pub use prune::prune;
