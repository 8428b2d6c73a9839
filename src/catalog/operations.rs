mod files;
mod persistence;
mod stats;

pub use files::walk_eligible;
pub use persistence::{load_catalog, save_catalog};
pub use stats::refresh_stats;
