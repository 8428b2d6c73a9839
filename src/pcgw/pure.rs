//! Pure functions for PCGamingWiki lookups
//!
//! These functions have no side effects and are deterministic.

mod query;
mod wikitext;

pub use query::{
    NOT_FOUND_REASON, mark_availability, parse_params, search_params, steam_appid_params,
    unavailable,
};
pub use wikitext::parse_save_templates;
