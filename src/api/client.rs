use super::models::RequestBody;
use super::response::extract_error_message;
use crate::error::{ChatBuscaError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// A chat completion backend. Success bodies come back untouched.
pub trait ChatCompletion: Send + Sync {
    fn complete(&self, request: &RequestBody) -> impl Future<Output = Result<Value>> + Send;
}

/// OpenAI-compatible `/chat/completions` client.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: &str, endpoint: &str, timeout_secs: u64) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                ChatBuscaError::ConfigError(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl ChatCompletion for OpenAiChatClient {
    async fn complete(&self, request: &RequestBody) -> Result<Value> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ChatBuscaError::ApiError {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
