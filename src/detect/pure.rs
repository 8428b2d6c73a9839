//! Pure functions for save detection
//!
//! These functions have no side effects and are deterministic.

mod classify;
mod naming;
mod patterns;

pub use classify::{is_save_listing, score_listing};
pub use naming::{generate_id, infer_name};
pub use patterns::{compile_patterns, matches_any};
