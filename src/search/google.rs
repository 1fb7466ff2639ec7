use super::WebSearch;
use crate::config::SearchSettings;
use crate::error::{ChatBuscaError, Result};
use crate::models::SearchResult;
use serde::Deserialize;

/// Google Programmable Search (Custom Search JSON API) client.
pub struct GoogleSearchClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    engine_id: String,
    max_results: u8,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

impl GoogleSearchClient {
    pub fn new(settings: &SearchSettings) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            engine_id: settings.engine_id.clone(),
            max_results: settings.max_results,
        })
    }
}

impl WebSearch for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let num = self.max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatBuscaError::SearchError(format!(
                "status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.items)
    }
}
