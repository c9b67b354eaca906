//! Gemini `generateContent` client.
//!
//! [`GeminiClient`] posts a single-turn prompt to
//! `{base}/v1beta/models/{model}:generateContent` and joins the text parts
//! of the first candidate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GenerationRequest, SummaryConfig, TextGenerator};
use crate::error::SummaryError;

/// Public Gemini API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<PromptPart<'a>>,
}

#[derive(Debug, Serialize)]
struct PromptPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// Text generator backed by the Gemini REST API.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Builds a client with the configured request timeout.
    ///
    /// A missing API key is not an error here; every request then fails
    /// with [`SummaryError::Configuration`].
    pub fn new(config: &SummaryConfig) -> Result<Self, SummaryError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SummaryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SummaryError::Configuration {
                message: "no API key configured".to_string(),
            })?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![PromptPart {
                    text: &request.prompt,
                }],
            }],
        };
        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SummaryError::HttpStatus(response.status().as_u16()));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text().ok_or(SummaryError::EmptyResponse)
    }
}
