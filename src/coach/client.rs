//! Generative coach API client.
//!
//! Sends prompts to a `generateContent` endpoint and validates the returned
//! text. Failures are surfaced to the caller, never retried here, and never
//! touch progression state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::prompt::{build_plan_prompt, parse_avatar_suggestion, parse_plan, strip_data_url, AVATAR_PROMPT};
use super::types::{AvatarSuggestion, CoachError, CoachProfile, PlannedExercise};
use crate::storage::config::CoachSettings;

/// Coach API client.
pub struct CoachClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL for API
    base_url: String,
    /// Model name
    model: String,
    /// API key for authentication
    api_key: String,
}

impl CoachClient {
    /// Create a client from settings, reading the API key from the environment.
    pub fn from_settings(settings: &CoachSettings) -> Result<Self, CoachError> {
        let api_key = settings.api_key().ok_or_else(|| {
            CoachError::Generation(format!(
                "API key is missing. Please set {} in your environment.",
                settings.api_key_env
            ))
        })?;
        Self::new(settings, api_key)
    }

    /// Create a client with an explicit API key.
    pub fn new(settings: &CoachSettings, api_key: String) -> Result<Self, CoachError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| CoachError::Generation(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }

    /// Request a five-exercise plan for the profile.
    pub async fn request_plan(&self, profile: &CoachProfile) -> Result<Vec<PlannedExercise>, CoachError> {
        let prompt = build_plan_prompt(profile);
        let request = GenerateRequest::json(vec![Part::text(prompt)]);

        let text = self.generate(&request).await.map_err(|e| {
            tracing::warn!("Plan generation failed: {}", e);
            e
        })?;
        parse_plan(&text)
    }

    /// Suggest an avatar from a base64 JPEG photo (data URL header allowed).
    pub async fn suggest_avatar(&self, photo_base64: &str) -> Result<AvatarSuggestion, CoachError> {
        let request = GenerateRequest::json(vec![
            Part::text(AVATAR_PROMPT.to_string()),
            Part::inline_jpeg(strip_data_url(photo_base64).to_string()),
        ]);

        let text = self.generate(&request).await.map_err(|e| {
            tracing::warn!("Avatar analysis failed: {}", e);
            e
        })?;
        parse_avatar_suggestion(&text)
    }

    /// Send a request and return the first candidate's text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, CoachError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    CoachError::Generation(format!("Coach service unreachable: {e}"))
                } else {
                    CoachError::Generation(e.to_string())
                }
            })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(CoachError::Generation(format!(
                "Coach service rejected the API key ({status})"
            )));
        }
        if !status.is_success() {
            return Err(CoachError::Generation(format!(
                "Coach service returned status {status}"
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CoachError::Parse(e.to_string()))?;

        body.first_text()
            .ok_or_else(|| CoachError::Parse("response contained no text".to_string()))
    }
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn json(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            ..Default::default()
        }
    }

    fn inline_jpeg(data: String) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: "image/jpeg".to_string(),
                data,
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

/// `generateContent` response body.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| part.text.clone())
    }
}
