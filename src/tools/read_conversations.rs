//! MCP `read_conversations` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_non_empty;
use crate::omi::error::OmiError;
use crate::omi::request::ConversationQuery;

/// Parameters for the `read_conversations` MCP tool.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReadConversationsParams {
    #[schemars(description = "The Omi user ID whose conversations to fetch")]
    pub user_id: String,

    /// Passed to the API as given. The API documents a maximum of 1000.
    #[schemars(description = "Maximum number of conversations to return (the API caps this at 1000)")]
    pub limit: Option<u64>,

    #[schemars(description = "Number of conversations to skip, for pagination")]
    pub offset: Option<u64>,

    #[schemars(description = "Whether to include conversations the user discarded")]
    pub include_discarded: Option<bool>,

    #[schemars(
        description = "Comma-separated list of conversation statuses to include (e.g. 'processing,completed')"
    )]
    pub statuses: Option<String>,
}

impl ReadConversationsParams {
    pub fn validate(self) -> Result<ConversationQuery, OmiError> {
        require_non_empty("user_id", &self.user_id)?;
        Ok(ConversationQuery {
            user_id: self.user_id,
            limit: self.limit,
            offset: self.offset,
            include_discarded: self.include_discarded,
            statuses: self.statuses,
        })
    }
}
