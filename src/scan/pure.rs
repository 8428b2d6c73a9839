mod tables;

pub use tables::{KNOWN_APPLICATIONS, PLATFORM_ROOTS};
