//! Value types exchanged with the Omi integrations API.
//!
//! Records ([`ConversationRecord`], [`MemoryRecord`]) are produced by the remote side
//! and only relayed; tool results pass them through as raw JSON. The typed forms are
//! used where the records are rendered for humans.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A conversation as returned by `GET /conversations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub structured: Option<Structured>,
    #[serde(deserialize_with = "null_as_default")]
    pub transcript_segments: Vec<TranscriptSegment>,
    #[serde(deserialize_with = "lenient")]
    pub geolocation: Option<Geolocation>,
}

impl ConversationRecord {
    /// Title if the remote side produced one, else the start of the raw text.
    pub fn headline(&self) -> String {
        if let Some(title) = self
            .structured
            .as_ref()
            .map(|s| s.title.trim())
            .filter(|t| !t.is_empty())
        {
            return title.to_string();
        }
        let text = self.text.as_deref().unwrap_or("").trim();
        truncate(text, 60)
    }
}

/// Remote-generated summary of a conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Structured {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSegment {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub end_time: f64,
}

/// A point on the globe. Both coordinates are required on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// A memory as returned by `GET /memories`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// A memory the caller asks the remote side to store verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MemoryCreateSpec {
    #[schemars(description = "The memory text to store")]
    pub content: String,

    #[schemars(description = "Optional tags to attach to the memory")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Where the text of a new conversation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationTextSource {
    AudioTranscript,
    Message,
    OtherText,
}

impl ConversationTextSource {
    pub const ALLOWED: &'static str = "audio_transcript, message, other_text";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AudioTranscript => "audio_transcript",
            Self::Message => "message",
            Self::OtherText => "other_text",
        }
    }
}

impl std::fmt::Display for ConversationTextSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConversationTextSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio_transcript" => Ok(Self::AudioTranscript),
            "message" => Ok(Self::Message),
            "other_text" => Ok(Self::OtherText),
            _ => Err(format!(
                "unknown text source: {s} (expected one of {})",
                Self::ALLOWED
            )),
        }
    }
}

/// Where the text handed to memory extraction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryTextSource {
    Email,
    SocialPost,
    Other,
}

impl MemoryTextSource {
    pub const ALLOWED: &'static str = "email, social_post, other";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::SocialPost => "social_post",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for MemoryTextSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemoryTextSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "social_post" => Ok(Self::SocialPost),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "unknown text source: {s} (expected one of {})",
                Self::ALLOWED
            )),
        }
    }
}

/// Read an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a nested object, dropping it to `None` when it is null or malformed.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Shorten `s` to at most `max` characters, appending `...` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
