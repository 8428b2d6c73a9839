use serde::{Deserialize, Serialize};

/// Response of `action=cargoquery`.
///
/// The rows are accepted both nested under `query` and at the top level.
#[derive(Debug, Default, Deserialize)]
pub struct CargoQueryResponse {
    #[serde(default)]
    pub query: Option<CargoQueryBody>,
    #[serde(default)]
    pub cargoquery: Vec<CargoRow>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl CargoQueryResponse {
    pub fn into_rows(self) -> Vec<CargoRow> {
        match self.query {
            Some(body) if !body.cargoquery.is_empty() => body.cargoquery,
            _ => self.cargoquery,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CargoQueryBody {
    #[serde(default)]
    pub cargoquery: Vec<CargoRow>,
}

#[derive(Debug, Deserialize)]
pub struct CargoRow {
    pub title: CargoTitle,
}

#[derive(Debug, Default, Deserialize)]
pub struct CargoTitle {
    #[serde(rename = "Page", default)]
    pub page: Option<String>,
    #[serde(rename = "PageID", default)]
    pub page_id: Option<String>,
    #[serde(rename = "Steam AppID", default)]
    pub steam_app_id: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Cover URL", default)]
    pub cover_url: Option<String>,
}

/// Response of `action=parse&prop=wikitext`
#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub parse: Option<ParseBody>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ParseBody {
    pub wikitext: Wikitext,
}

#[derive(Debug, Deserialize)]
pub struct Wikitext {
    #[serde(rename = "*")]
    pub content: String,
}

/// MediaWiki error object
#[derive(Debug, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// One candidate returned by a knowledge-source search
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub page_id: String,
    #[serde(default)]
    pub steam_app_id: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub cover_url: String,
    /// Save-path templates, placeholders unexpanded
    #[serde(default)]
    pub save_paths: Vec<String>,
    /// True when at least one save path was extracted
    #[serde(default)]
    pub available: bool,
    /// Why the candidate is unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<CargoTitle> for SearchResult {
    fn from(title: CargoTitle) -> Self {
        SearchResult {
            name: title.page.unwrap_or_default(),
            page_id: title.page_id.unwrap_or_default(),
            steam_app_id: title.steam_app_id.unwrap_or_default(),
            release_date: title.released.unwrap_or_default(),
            cover_url: title.cover_url.unwrap_or_default(),
            ..SearchResult::default()
        }
    }
}

/// A user's choice when adding an application from the knowledge source
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Selection {
    pub name: String,
    #[serde(default)]
    pub selected: Option<SearchResult>,
    #[serde(default)]
    pub custom_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_cargo_rows() {
        let json = r#"{"query":{"cargoquery":[{"title":{
            "Page":"Hollow Knight","PageID":"34721","Steam AppID":"367520",
            "Released":"2017-02-24","Cover URL":"https://x/cover.png"}}]}}"#;
        let rows = serde_json::from_str::<CargoQueryResponse>(json).unwrap().into_rows();
        assert_eq!(rows.len(), 1);
        let result = SearchResult::from(rows.into_iter().next().unwrap().title);
        assert_eq!(result.name, "Hollow Knight");
        assert_eq!(result.page_id, "34721");
        assert_eq!(result.steam_app_id, "367520");
        assert!(!result.available);
    }

    #[test]
    fn top_level_cargo_rows_with_nulls() {
        let json = r#"{"cargoquery":[{"title":{"Page":"Foo","PageID":"1","Steam AppID":null}}]}"#;
        let rows = serde_json::from_str::<CargoQueryResponse>(json).unwrap().into_rows();
        let result = SearchResult::from(rows.into_iter().next().unwrap().title);
        assert_eq!(result.steam_app_id, "");
        assert_eq!(result.cover_url, "");
    }

    #[test]
    fn parse_body() {
        let json = r#"{"parse":{"title":"Foo","pageid":1,"wikitext":{"*":"== Saves =="}}}"#;
        let parsed: ParseResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.parse.unwrap().wikitext.content, "== Saves ==");
    }
}
