//! PCGamingWiki knowledge source
//!
//! Resolves an application name (or Steam app id) to candidate pages and the
//! save-location templates documented on them. Templates are returned with
//! their placeholders unexpanded; expansion happens when a candidate is
//! added to the catalog.

mod operations;
mod pipelines;
pub mod pure;
mod types;

pub use operations::PcgwClient;
pub use pipelines::{lookup, search, search_by_steam_app_id};
pub use types::{SearchResult, Selection};

#[cfg(test)]
pub(crate) use pipelines::fake;

use crate::error::Result;

/// Raw access to a save-location knowledge base.
///
/// Queries return candidates without save paths; [`search`] and
/// [`lookup`] fill them in through [`KnowledgeSource::save_paths`].
pub trait KnowledgeSource {
    fn query_by_name(&self, name: &str) -> Result<Vec<SearchResult>>;

    fn query_by_steam_app_id(&self, app_id: &str) -> Result<Vec<SearchResult>>;

    /// Save-path templates documented on a page
    fn save_paths(&self, page_id: &str) -> Result<Vec<String>>;
}

impl KnowledgeSource for PcgwClient {
    fn query_by_name(&self, name: &str) -> Result<Vec<SearchResult>> {
        PcgwClient::query_by_name(self, name)
    }

    fn query_by_steam_app_id(&self, app_id: &str) -> Result<Vec<SearchResult>> {
        PcgwClient::query_by_steam_app_id(self, app_id)
    }

    fn save_paths(&self, page_id: &str) -> Result<Vec<String>> {
        self.fetch_save_paths(page_id)
    }
}
