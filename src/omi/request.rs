//! Request construction: validated inputs to a single outbound HTTP request.
//!
//! Nothing here touches the network. Every builder returns an [`OmiRequest`] whose
//! query string and JSON body contain only the fields the caller actually supplied.

use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

use crate::omi::error::OmiError;
use crate::omi::types::{ConversationTextSource, Geolocation, MemoryCreateSpec, MemoryTextSource};

/// Language sent with a new conversation when the caller gives none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Validated input for `read_conversations`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationQuery {
    pub user_id: String,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub include_discarded: Option<bool>,
    /// Comma-separated status tokens, forwarded untouched.
    pub statuses: Option<String>,
}

/// Validated input for `read_memories`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryQuery {
    pub user_id: String,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Validated input for `create_conversation`. Serializes to the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewConversation {
    #[serde(skip)]
    pub user_id: String,
    pub text: String,
    pub text_source: ConversationTextSource,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_source_spec: Option<String>,
}

/// Validated input for `create_memories`. Exactly one of `text` / `memories` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMemories {
    #[serde(skip)]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memories: Option<Vec<MemoryCreateSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_source: Option<MemoryTextSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_source_spec: Option<String>,
}

/// One fully-formed outbound call.
#[derive(Debug, Clone)]
pub struct OmiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

/// Builds request URLs under `{base_url}/v2/integrations/{app_id}/`.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base: Url,
    app_id: String,
}

impl RequestBuilder {
    pub fn new(base_url: &str, app_id: &str) -> Result<Self, OmiError> {
        let base = Url::parse(base_url)
            .map_err(|e| OmiError::Internal(format!("invalid base URL {base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(OmiError::Internal(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }
        Ok(Self {
            base,
            app_id: app_id.to_string(),
        })
    }

    pub fn read_conversations(&self, query: &ConversationQuery) -> Result<OmiRequest, OmiError> {
        let mut url = self.endpoint(&["conversations"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("uid", &query.user_id);
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = query.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
            if let Some(include) = query.include_discarded {
                pairs.append_pair("include_discarded", if include { "true" } else { "false" });
            }
            if let Some(statuses) = &query.statuses {
                pairs.append_pair("statuses", statuses);
            }
        }
        Ok(OmiRequest {
            method: Method::GET,
            url,
            body: None,
        })
    }

    pub fn read_memories(&self, query: &MemoryQuery) -> Result<OmiRequest, OmiError> {
        let mut url = self.endpoint(&["memories"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("uid", &query.user_id);
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = query.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
        }
        Ok(OmiRequest {
            method: Method::GET,
            url,
            body: None,
        })
    }

    pub fn create_conversation(&self, input: &NewConversation) -> Result<OmiRequest, OmiError> {
        self.post(&["user", "conversations"], &input.user_id, input)
    }

    pub fn create_memories(&self, input: &NewMemories) -> Result<OmiRequest, OmiError> {
        self.post(&["user", "memories"], &input.user_id, input)
    }

    fn post<T: Serialize>(
        &self,
        segments: &[&str],
        user_id: &str,
        body: &T,
    ) -> Result<OmiRequest, OmiError> {
        let mut url = self.endpoint(segments)?;
        url.query_pairs_mut().append_pair("uid", user_id);
        let body = serde_json::to_value(body)
            .map_err(|e| OmiError::Internal(format!("failed to encode request body: {e}")))?;
        Ok(OmiRequest {
            method: Method::POST,
            url,
            body: Some(body),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, OmiError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| OmiError::Internal("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["v2", "integrations", self.app_id.as_str()])
            .extend(segments);
        Ok(url)
    }
}
