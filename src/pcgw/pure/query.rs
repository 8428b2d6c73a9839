// Request parameters and availability rules

use crate::pcgw::types::SearchResult;

/// Maximum number of candidates a name search returns
const SEARCH_LIMIT: usize = 10;

pub const NOT_FOUND_REASON: &str = "Not found on PCGamingWiki";
pub const NO_PATHS_REASON: &str = "No save locations documented on PCGamingWiki";

const CARGO_FIELDS: &str = "Infobox_game._pageName=Page,Infobox_game._pageID=PageID,\
Infobox_game.Steam_AppID,Infobox_game.Released,Infobox_game.Cover_URL";

/// Quotes would end the string literal inside the cargo `where` clause
fn sanitize(value: &str) -> String {
    value.chars().filter(|c| *c != '"' && *c != '\\').collect::<String>().trim().to_string()
}

fn cargo_params(where_clause: String) -> Vec<(&'static str, String)> {
    vec![
        ("action", "cargoquery".to_string()),
        ("tables", "Infobox_game".to_string()),
        ("fields", CARGO_FIELDS.to_string()),
        ("where", where_clause),
        ("limit", SEARCH_LIMIT.to_string()),
        ("format", "json".to_string()),
    ]
}

/// Pages whose title contains `name`
pub fn search_params(name: &str) -> Vec<(&'static str, String)> {
    cargo_params(format!("Infobox_game._pageName LIKE \"%{}%\"", sanitize(name)))
}

/// Pages listing `app_id` among their Steam app ids
pub fn steam_appid_params(app_id: &str) -> Vec<(&'static str, String)> {
    cargo_params(format!("Infobox_game.Steam_AppID HOLDS \"{}\"", sanitize(app_id)))
}

pub fn parse_params(page_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("action", "parse".to_string()),
        ("format", "json".to_string()),
        ("pageid", page_id.to_string()),
        ("prop", "wikitext".to_string()),
    ]
}

/// Set `available`/`reason` from the extracted save paths
pub fn mark_availability(result: &mut SearchResult) {
    result.available = !result.save_paths.is_empty();
    result.reason = if result.available {
        None
    } else {
        Some(result.reason.take().unwrap_or_else(|| NO_PATHS_REASON.to_string()))
    };
}

/// Placeholder candidate for a name the knowledge source doesn't know
pub fn unavailable(name: &str, reason: &str) -> SearchResult {
    SearchResult {
        name: name.to_string(),
        available: false,
        reason: Some(reason.to_string()),
        ..SearchResult::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(params: &'a [(&'static str, String)], key: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn search_uses_like_predicate() {
        let params = search_params("Hollow \"Knight\"");
        assert_eq!(value(&params, "where"), "Infobox_game._pageName LIKE \"%Hollow Knight%\"");
        assert_eq!(value(&params, "limit"), "10");
        assert_eq!(value(&params, "format"), "json");
        assert_eq!(value(&params, "action"), "cargoquery");
    }

    #[test]
    fn steam_lookup_uses_holds_predicate() {
        let params = steam_appid_params("367520");
        assert_eq!(value(&params, "where"), "Infobox_game.Steam_AppID HOLDS \"367520\"");
    }

    #[test]
    fn availability_follows_paths() {
        let mut found = SearchResult {
            save_paths: vec!["%APPDATA%\\Foo".into()],
            ..SearchResult::default()
        };
        mark_availability(&mut found);
        assert!(found.available);
        assert!(found.reason.is_none());

        let mut empty = SearchResult::default();
        mark_availability(&mut empty);
        assert!(!empty.available);
        assert_eq!(empty.reason.as_deref(), Some(NO_PATHS_REASON));
    }

    #[test]
    fn earlier_reason_is_kept() {
        let mut failed = SearchResult {
            reason: Some("timed out".into()),
            ..SearchResult::default()
        };
        mark_availability(&mut failed);
        assert_eq!(failed.reason.as_deref(), Some("timed out"));
    }
}
