//! Filesystem side of discovery

mod discover;

pub use discover::{discover, known_application_present};
