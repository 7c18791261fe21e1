//! Defines the language model trait and the Gemini implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Error;

/// The environment variable that holds the API key for the language model.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// The model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// The base URL of the Gemini REST API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Generates text from a prompt.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a reply to `prompt`.
    ///
    /// # Errors
    /// Implementations should return an [Error::ModelError] if the model could not be
    /// reached or did not produce any text.
    async fn generate(&self, prompt: &str) -> Result<String, Error>;
}

/// Calls the `generateContent` method of the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    http: reqwest::Client,
    api_key: String,
    url: String,
}

impl GeminiModel {
    /// Create a client for `model` served under `base_url`, e.g. [GEMINI_BASE_URL].
    pub fn new(http: reqwest::Client, api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_owned(),
            url: format!(
                "{}/v1beta/models/{model}:generateContent",
                base_url.trim_end_matches('/')
            ),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// The text parts of the first candidate joined together.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|error| Error::ModelError(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::ModelError(format!("{status}: {detail}")));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|error| Error::ModelError(error.to_string()))?
            .into_text()
            .ok_or_else(|| Error::ModelError("the response did not contain any text".to_owned()))
    }
}
