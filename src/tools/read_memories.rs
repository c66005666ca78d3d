//! MCP `read_memories` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_non_empty;
use crate::omi::error::OmiError;
use crate::omi::request::MemoryQuery;

/// Parameters for the `read_memories` MCP tool.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReadMemoriesParams {
    #[schemars(description = "The Omi user ID whose memories to fetch")]
    pub user_id: String,

    #[schemars(description = "Maximum number of memories to return (the API caps this at 1000)")]
    pub limit: Option<u64>,

    #[schemars(description = "Number of memories to skip, for pagination")]
    pub offset: Option<u64>,
}

impl ReadMemoriesParams {
    pub fn validate(self) -> Result<MemoryQuery, OmiError> {
        require_non_empty("user_id", &self.user_id)?;
        Ok(MemoryQuery {
            user_id: self.user_id,
            limit: self.limit,
            offset: self.offset,
        })
    }
}
