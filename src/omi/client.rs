//! HTTP client for the Omi integrations API.
//!
//! [`OmiClient`] sends exactly one request per call. There is no retry: create calls
//! are not idempotent, so a failure is reported and never replayed.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::OmiApiConfig;
use crate::omi::error::OmiError;
use crate::omi::request::{
    ConversationQuery, MemoryQuery, NewConversation, NewMemories, OmiRequest, RequestBuilder,
};
use crate::omi::response::{empty_payload, extract_list, remote_error};

/// Shared, read-only handle to the Omi API. Cheap to clone.
#[derive(Clone)]
pub struct OmiClient {
    http: reqwest::Client,
    builder: RequestBuilder,
    api_key: String,
}

impl std::fmt::Debug for OmiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmiClient")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

impl OmiClient {
    /// Validate `config` and build a client. Fails on missing credentials.
    pub fn new(config: &OmiApiConfig) -> Result<Self> {
        config.validate()?;

        let mut http = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            http = http.timeout(Duration::from_secs(secs));
        }
        let http = http.build().context("failed to build HTTP client")?;

        let builder = RequestBuilder::new(&config.base_url, &config.app_id)?;

        Ok(Self {
            http,
            builder,
            api_key: config.api_key.clone(),
        })
    }

    /// `GET /conversations` → `{ "conversations": [...] }`.
    pub async fn read_conversations(&self, query: &ConversationQuery) -> Result<Value, OmiError> {
        let request = self.builder.read_conversations(query)?;
        let body = self.fetch(request).await?;
        extract_list("conversations", &body)
    }

    /// `GET /memories` → `{ "memories": [...] }`.
    pub async fn read_memories(&self, query: &MemoryQuery) -> Result<Value, OmiError> {
        let request = self.builder.read_memories(query)?;
        let body = self.fetch(request).await?;
        extract_list("memories", &body)
    }

    /// `POST /user/conversations`. Each call creates a new remote record.
    pub async fn create_conversation(&self, input: &NewConversation) -> Result<Value, OmiError> {
        let request = self.builder.create_conversation(input)?;
        self.send(request).await?;
        Ok(empty_payload())
    }

    /// `POST /user/memories`. Each call creates new remote records.
    pub async fn create_memories(&self, input: &NewMemories) -> Result<Value, OmiError> {
        let request = self.builder.create_memories(input)?;
        self.send(request).await?;
        Ok(empty_payload())
    }

    /// Send and read the success body as text.
    async fn fetch(&self, request: OmiRequest) -> Result<String, OmiError> {
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }

    /// Send one request; non-2xx answers become [`OmiError::Remote`].
    async fn send(&self, request: OmiRequest) -> Result<reqwest::Response, OmiError> {
        let OmiRequest { method, url, body } = request;

        match &body {
            Some(payload) => debug!(%method, %url, %payload, "sending Omi request"),
            None => debug!(%method, %url, "sending Omi request"),
        }

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json");
        if let Some(payload) = &body {
            builder = builder.json(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "Omi request succeeded");
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        warn!(
            %method,
            %url,
            status = status.as_u16(),
            body = %text,
            "Omi request failed"
        );
        Err(remote_error(status, text))
    }
}
