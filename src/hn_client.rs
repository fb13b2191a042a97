use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::FetchFailure;
use crate::models::SearchResultPage;

/// The remote search index. The app only ever asks for one page of one query.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchFailure>;
}

/// Client for the Algolia-backed Hacker News search endpoint.
pub struct HnSearchClient {
    client: Client,
    search_url: String,
    hits_per_page: u32,
}

impl HnSearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        // No request timeout: a stalled API simply leaves the view loading.
        let client = Client::builder()
            .user_agent(concat!("hn_search/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &SearchConfig) -> Self {
        Self {
            client,
            search_url: format!("{}/search", config.api_base.trim_end_matches('/')),
            hits_per_page: config.hits_per_page,
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl SearchApi for HnSearchClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchFailure> {
        debug!(query, page, hits_per_page = self.hits_per_page, "requesting search page");

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("query", query)])
            .query(&[("page", page), ("hitsPerPage", self.hits_per_page)])
            .send()
            .await
            .map_err(|err| FetchFailure::transport(&err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchFailure::transport(&err))?;
        serde_json::from_slice(&body).map_err(|err| FetchFailure::decode(&err))
    }
}
