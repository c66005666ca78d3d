//! MCP `create_conversation` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{require_non_empty, validate_timestamp};
use crate::omi::error::OmiError;
use crate::omi::request::{NewConversation, DEFAULT_LANGUAGE};
use crate::omi::types::{ConversationTextSource, Geolocation};

/// Parameters for the `create_conversation` MCP tool.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateConversationParams {
    #[schemars(description = "The full text of the conversation")]
    pub text: String,

    #[schemars(description = "The Omi user ID to create the conversation for")]
    pub user_id: String,

    #[schemars(
        description = "Where the text came from: 'audio_transcript', 'message', or 'other_text'"
    )]
    pub text_source: String,

    #[schemars(description = "ISO-8601 time the conversation started")]
    pub started_at: Option<String>,

    #[schemars(description = "ISO-8601 time the conversation finished")]
    pub finished_at: Option<String>,

    #[schemars(description = "Language code of the text. Defaults to 'en'.")]
    pub language: Option<String>,

    #[schemars(description = "Where the conversation took place. Requires both latitude and longitude.")]
    pub geolocation: Option<GeolocationParams>,

    #[schemars(description = "Free-form detail about the text source (e.g. app name)")]
    pub text_source_spec: Option<String>,
}

/// Coordinates as supplied by the caller. Both must be present.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GeolocationParams {
    #[schemars(description = "Latitude in degrees, -90 to 90")]
    pub latitude: Option<f64>,

    #[schemars(description = "Longitude in degrees, -180 to 180")]
    pub longitude: Option<f64>,
}

impl GeolocationParams {
    fn validate(self) -> Result<Geolocation, OmiError> {
        let (latitude, longitude) = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            (Some(_), None) => {
                return Err(OmiError::validation(
                    "geolocation.longitude",
                    "required when geolocation is given",
                ))
            }
            (None, Some(_)) => {
                return Err(OmiError::validation(
                    "geolocation.latitude",
                    "required when geolocation is given",
                ))
            }
            (None, None) => {
                return Err(OmiError::validation(
                    "geolocation",
                    "latitude and longitude are both required",
                ))
            }
        };
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(OmiError::validation(
                "geolocation.latitude",
                "must be between -90 and 90",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(OmiError::validation(
                "geolocation.longitude",
                "must be between -180 and 180",
            ));
        }
        Ok(Geolocation {
            latitude,
            longitude,
        })
    }
}

impl CreateConversationParams {
    pub fn validate(self) -> Result<NewConversation, OmiError> {
        require_non_empty("text", &self.text)?;
        require_non_empty("user_id", &self.user_id)?;

        let text_source: ConversationTextSource = self
            .text_source
            .parse()
            .map_err(|e: String| OmiError::validation("text_source", e))?;

        if let Some(ts) = &self.started_at {
            validate_timestamp("started_at", ts)?;
        }
        if let Some(ts) = &self.finished_at {
            validate_timestamp("finished_at", ts)?;
        }

        let geolocation = self.geolocation.map(GeolocationParams::validate).transpose()?;

        let language = match self.language {
            Some(lang) if !lang.trim().is_empty() => lang,
            _ => DEFAULT_LANGUAGE.to_string(),
        };

        Ok(NewConversation {
            user_id: self.user_id,
            text: self.text,
            text_source,
            language,
            started_at: self.started_at,
            finished_at: self.finished_at,
            geolocation,
            text_source_spec: self.text_source_spec,
        })
    }
}
