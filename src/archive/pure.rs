mod naming;

pub use naming::{entry_name, entry_prefix, snapshot_basename};
