//! MCP `create_memories` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_non_empty;
use crate::omi::error::OmiError;
use crate::omi::request::NewMemories;
use crate::omi::types::{MemoryCreateSpec, MemoryTextSource};

/// Parameters for the `create_memories` MCP tool.
///
/// Provide either `text` (the API extracts memories from it) or `memories`
/// (stored as given), never both.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateMemoriesParams {
    #[schemars(description = "The Omi user ID to create memories for")]
    pub user_id: String,

    #[schemars(
        description = "Free text to extract memories from. Required unless 'memories' is provided."
    )]
    pub text: Option<String>,

    #[schemars(
        description = "Explicit memories to store, each with 'content' and optional 'tags'. Required unless 'text' is provided."
    )]
    pub memories: Option<Vec<MemoryCreateSpec>>,

    #[schemars(description = "Where the text came from: 'email', 'social_post', or 'other'")]
    pub text_source: Option<String>,

    #[schemars(description = "Free-form detail about the text source (e.g. app name)")]
    pub text_source_spec: Option<String>,
}

impl CreateMemoriesParams {
    pub fn validate(self) -> Result<NewMemories, OmiError> {
        require_non_empty("user_id", &self.user_id)?;

        match (&self.text, &self.memories) {
            (Some(_), Some(_)) => {
                return Err(OmiError::validation(
                    "text, memories",
                    "provide either `text` or `memories`, not both",
                ))
            }
            (None, None) => {
                return Err(OmiError::validation(
                    "text, memories",
                    "one of `text` or `memories` is required",
                ))
            }
            _ => {}
        }

        if let Some(text) = &self.text {
            require_non_empty("text", text)?;
        }
        if let Some(memories) = &self.memories {
            if memories.is_empty() {
                return Err(OmiError::validation(
                    "memories",
                    "must contain at least one memory",
                ));
            }
            for (i, memory) in memories.iter().enumerate() {
                require_non_empty(&format!("memories[{i}].content"), &memory.content)?;
            }
        }

        let text_source = self
            .text_source
            .as_deref()
            .map(str::parse::<MemoryTextSource>)
            .transpose()
            .map_err(|e| OmiError::validation("text_source", e))?;

        Ok(NewMemories {
            user_id: self.user_id,
            text: self.text,
            memories: self.memories,
            text_source,
            text_source_spec: self.text_source_spec,
        })
    }
}
