// Search pipelines: query, then resolve save paths per candidate

use tracing::{debug, warn};

use super::KnowledgeSource;
use super::pure::{NOT_FOUND_REASON, mark_availability, unavailable};
use super::types::SearchResult;
use crate::error::{Result, SaveError};

fn resolve(source: &dyn KnowledgeSource, mut candidate: SearchResult) -> SearchResult {
    match source.save_paths(&candidate.page_id) {
        Ok(paths) => candidate.save_paths = paths,
        Err(e) => {
            warn!(page = %candidate.name, error = %e, "Could not fetch save data");
            candidate.reason = Some(format!("Save data could not be fetched: {}", e));
        }
    }
    mark_availability(&mut candidate);
    candidate
}

/// Candidates for `name`, each marked available or not.
///
/// A query failure is an error; a failure fetching one candidate's page
/// only marks that candidate unavailable.
pub fn search(source: &dyn KnowledgeSource, name: &str) -> Result<Vec<SearchResult>> {
    let candidates = source.query_by_name(name)?;
    debug!(query = name, count = candidates.len(), "Knowledge source search");
    Ok(candidates
        .into_iter()
        .map(|candidate| resolve(source, candidate))
        .collect())
}

/// The page registered for a Steam app id
pub fn search_by_steam_app_id(source: &dyn KnowledgeSource, app_id: &str) -> Result<SearchResult> {
    match source.query_by_steam_app_id(app_id)?.into_iter().next() {
        Some(candidate) => Ok(resolve(source, candidate)),
        None => Err(SaveError::NotFound(format!("Steam app {}", app_id))),
    }
}

/// Best candidate for `name`: the first search result, resolved.
///
/// Only the first candidate's page is fetched.
pub fn lookup(source: &dyn KnowledgeSource, name: &str) -> Result<SearchResult> {
    match source.query_by_name(name)?.into_iter().next() {
        Some(candidate) => Ok(resolve(source, candidate)),
        None => Ok(unavailable(name, NOT_FOUND_REASON)),
    }
}
