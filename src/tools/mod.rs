//! MCP tool surface: parameter schemas, validation, and the rmcp tool router.
//!
//! Each tool validates its parameters before any network activity, then hands a
//! validated input to the shared [`OmiClient`]. Errors come back to the caller as
//! error tool results carrying the [`OmiError`] message.

pub mod create_conversation;
pub mod create_memories;
pub mod read_conversations;
pub mod read_memories;

use create_conversation::CreateConversationParams;
use create_memories::CreateMemoriesParams;
use read_conversations::ReadConversationsParams;
use read_memories::ReadMemoriesParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use serde_json::Value;
use std::sync::Arc;

use crate::omi::{OmiClient, OmiError};

/// The Omi MCP tool handler. Holds the shared client and exposes all tools via the
/// `#[tool_router]` macro. Carries no per-invocation state.
#[derive(Clone)]
pub struct OmiTools {
    tool_router: ToolRouter<Self>,
    client: Arc<OmiClient>,
}

#[tool_router]
impl OmiTools {
    pub fn new(client: Arc<OmiClient>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }

    /// List a user's conversations.
    #[tool(description = "Retrieve conversations for an Omi user, newest first. Supports pagination with limit/offset, including discarded conversations, and filtering by status.")]
    async fn read_conversations(
        &self,
        Parameters(params): Parameters<ReadConversationsParams>,
    ) -> Result<String, String> {
        let query = params.validate().map_err(reject)?;
        tracing::info!(
            user_id = %query.user_id,
            limit = ?query.limit,
            offset = ?query.offset,
            include_discarded = ?query.include_discarded,
            statuses = ?query.statuses,
            "read_conversations called"
        );
        let result = self.client.read_conversations(&query).await;
        respond("read_conversations", result)
    }

    /// List a user's memories.
    #[tool(description = "Retrieve memories (facts and notes) stored for an Omi user. Supports pagination with limit/offset.")]
    async fn read_memories(
        &self,
        Parameters(params): Parameters<ReadMemoriesParams>,
    ) -> Result<String, String> {
        let query = params.validate().map_err(reject)?;
        tracing::info!(
            user_id = %query.user_id,
            limit = ?query.limit,
            offset = ?query.offset,
            "read_memories called"
        );
        let result = self.client.read_memories(&query).await;
        respond("read_memories", result)
    }

    /// Create a conversation from text.
    #[tool(description = "Create a new conversation in Omi from text. text_source is one of 'audio_transcript', 'message', 'other_text'. Each call creates a new conversation.")]
    async fn create_conversation(
        &self,
        Parameters(params): Parameters<CreateConversationParams>,
    ) -> Result<String, String> {
        let input = params.validate().map_err(reject)?;
        tracing::info!(
            user_id = %input.user_id,
            text_len = input.text.len(),
            text_source = %input.text_source,
            language = %input.language,
            has_geolocation = input.geolocation.is_some(),
            "create_conversation called"
        );
        let result = self.client.create_conversation(&input).await;
        respond("create_conversation", result)
    }

    /// Create memories from text or from an explicit list.
    #[tool(description = "Create memories in Omi, either extracted from free 'text' or stored directly from a 'memories' list. Provide exactly one of the two. Each call creates new memories.")]
    async fn create_memories(
        &self,
        Parameters(params): Parameters<CreateMemoriesParams>,
    ) -> Result<String, String> {
        let input = params.validate().map_err(reject)?;
        tracing::info!(
            user_id = %input.user_id,
            from_text = input.text.is_some(),
            explicit = input.memories.as_ref().map_or(0, Vec::len),
            "create_memories called"
        );
        let result = self.client.create_memories(&input).await;
        respond("create_memories", result)
    }
}

#[tool_handler]
impl ServerHandler for OmiTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "Bridge to the Omi API. Use read_conversations and read_memories to look up \
                 a user's data, create_conversation to add a conversation from text, and \
                 create_memories to add memories."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}

fn reject(err: OmiError) -> String {
    tracing::info!(error = %err, "rejected invalid parameters");
    err.to_string()
}

fn respond(tool: &str, result: Result<Value, OmiError>) -> Result<String, String> {
    match result {
        Ok(payload) => {
            serde_json::to_string(&payload).map_err(|e| format!("serialization failed: {e}"))
        }
        Err(err) => {
            tracing::warn!(tool, kind = ?err.kind(), error = %err, "tool call failed");
            Err(err.to_string())
        }
    }
}

/// Fail with a validation error when `value` is empty or whitespace.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), OmiError> {
    if value.trim().is_empty() {
        return Err(OmiError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// ISO-8601 shapes with a numeric offset, extended and basic.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y%m%dT%H%M%S%.f%z",
    "%Y%m%dT%H%M%z",
];

/// ISO-8601 local date-time shapes without an offset.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Accept ISO-8601 date-times: extended or basic format, seconds optional,
/// offset as `Z`, `+hh:mm`, `+hhmm`, or absent. The value is forwarded as given.
pub(crate) fn validate_timestamp(field: &str, value: &str) -> Result<(), OmiError> {
    if chrono::DateTime::parse_from_rfc3339(value).is_ok() {
        return Ok(());
    }

    let normalized = match value.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+0000"),
        None => value.to_string(),
    };
    let with_offset = OFFSET_FORMATS
        .iter()
        .any(|fmt| chrono::DateTime::parse_from_str(&normalized, fmt).is_ok());
    let local = LOCAL_FORMATS
        .iter()
        .any(|fmt| chrono::NaiveDateTime::parse_from_str(value, fmt).is_ok());
    if with_offset || local {
        return Ok(());
    }

    Err(OmiError::validation(
        field,
        format!("expected an ISO-8601 date-time, got {value:?}"),
    ))
}
