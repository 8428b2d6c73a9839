// Blocking MediaWiki client for PCGamingWiki

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Result, SaveError};
use crate::pcgw::pure::{parse_params, parse_save_templates, search_params, steam_appid_params};
use crate::pcgw::types::{CargoQueryResponse, ParseResponse, SearchResult};

pub const DEFAULT_API_URL: &str = "https://www.pcgamingwiki.com/w/api.php";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct PcgwClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PcgwClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("savekeep/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    fn get<T: DeserializeOwned>(&self, params: &[(&'static str, String)]) -> Result<T> {
        let response = self.http.get(&self.base_url).query(params).send()?;

        if !response.status().is_success() {
            return Err(SaveError::Transport(format!(
                "PCGamingWiki request failed: HTTP {}",
                response.status()
            )));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn cargo_query(&self, params: &[(&'static str, String)]) -> Result<Vec<SearchResult>> {
        let response: CargoQueryResponse = self.get(params)?;
        if let Some(err) = &response.error {
            return Err(SaveError::Transport(format!("{}: {}", err.code, err.info)));
        }
        Ok(response
            .into_rows()
            .into_iter()
            .map(|row| SearchResult::from(row.title))
            .collect())
    }

    /// Candidate pages whose title contains `name`, without save paths
    pub fn query_by_name(&self, name: &str) -> Result<Vec<SearchResult>> {
        self.cargo_query(&search_params(name))
    }

    /// Candidate pages for a Steam app id, without save paths
    pub fn query_by_steam_app_id(&self, app_id: &str) -> Result<Vec<SearchResult>> {
        self.cargo_query(&steam_appid_params(app_id))
    }

    /// Raw wikitext of a page
    pub fn fetch_wikitext(&self, page_id: &str) -> Result<String> {
        let response: ParseResponse = self.get(&parse_params(page_id))?;
        match (response.parse, response.error) {
            (Some(body), _) => Ok(body.wikitext.content),
            (None, Some(err)) => Err(SaveError::Transport(format!(
                "page {}: {}",
                page_id, err.info
            ))),
            (None, None) => Err(SaveError::Transport(format!(
                "page {}: response carried no wikitext",
                page_id
            ))),
        }
    }

    pub fn fetch_save_paths(&self, page_id: &str) -> Result<Vec<String>> {
        let markup = self.fetch_wikitext(page_id)?;
        Ok(parse_save_templates(&markup))
    }
}
