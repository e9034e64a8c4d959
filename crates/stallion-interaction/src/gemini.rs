//! GeminiBackend - Direct REST API implementation of the generative
//! backend capability.
//!
//! Calls the Gemini REST API with web-search grounding enabled and maps
//! grounding chunks to citations. Configuration comes from the
//! environment or `secret.toml`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stallion_core::StallionError;
use stallion_core::session::{
    BackendError, BackendErrorKind, Citation, CitationKind, GeneratedReply, GenerativeBackend,
    HistoryEntry, MessageRole, PromptContext,
};
use stallion_infrastructure::{SecretConfig, SecretService};

use crate::prompt;

/// Default model when neither the secret file nor the caller overrides it.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Transport-level ceiling per request; the session engine itself applies
/// no timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reply text used when the API answers without any text parts.
pub const NO_RESPONSE_TEXT: &str =
    "I apologize, but I am currently unable to process your inquiry.";

/// Display label for grounding sources the API returns without a title.
const DEFAULT_CITATION_TITLE: &str = "MMSU Reference";

const GROUNDING_TEMPERATURE: f64 = 0.7;

/// Backend implementation that talks to the Gemini HTTP API.
#[derive(Clone, Debug)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Creates a new backend with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads configuration from the environment or `secret.toml`.
    ///
    /// The `GEMINI_API_KEY` environment variable takes precedence over
    /// the secret file. Model name defaults to
    /// [`DEFAULT_GEMINI_MODEL`] if not specified.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key can be found.
    pub async fn try_from_env() -> Result<Self, StallionError> {
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            if !api_key.trim().is_empty() {
                return Ok(Self::new(api_key, DEFAULT_GEMINI_MODEL));
            }
        }

        let service = SecretService::new()?;
        let config = service.load_secrets().await?;
        Self::from_secret_config(config)
    }

    /// Builds a backend from an already-loaded secret configuration.
    pub fn from_secret_config(config: SecretConfig) -> Result<Self, StallionError> {
        let gemini = config.gemini.ok_or_else(|| {
            StallionError::config(
                "Gemini API key not configured; set GEMINI_API_KEY or add it to secret.toml",
            )
        })?;

        let model = gemini
            .model
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        Ok(Self::new(gemini.api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(
        &self,
        prompt_text: &str,
        history: &[HistoryEntry],
        ctx: &PromptContext,
    ) -> Result<GeneratedReply, BackendError> {
        let request = GenerateContentRequest {
            contents: build_contents(prompt_text, history),
            system_instruction: Some(Content {
                role: "system".to_string(),
                parts: vec![Part {
                    text: prompt::system_instruction(ctx),
                }],
            }),
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
            generation_config: GenerationConfig {
                temperature: GROUNDING_TEMPERATURE,
            },
        };

        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        debug!(model = %self.model, history_len = history.len(), "sending generateContent request");

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                let kind = if err.is_connect() || err.is_timeout() {
                    BackendErrorKind::Network
                } else {
                    BackendErrorKind::Unknown
                };
                BackendError::new(kind, format!("Gemini API request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            BackendError::malformed(format!("Failed to parse Gemini response: {err}"))
        })?;

        Ok(reply_from_response(parsed))
    }
}

/// Maps the conversation history plus the new prompt to Gemini contents.
///
/// Assistant turns use the `model` role; the prompt always travels as the
/// final `user` entry.
fn build_contents(prompt_text: &str, history: &[HistoryEntry]) -> Vec<Content> {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|entry| Content {
            role: match entry.role {
                MessageRole::User => "user".to_string(),
                MessageRole::Assistant => "model".to_string(),
            },
            parts: vec![Part {
                text: entry.content.clone(),
            }],
        })
        .collect();

    contents.push(Content {
        role: "user".to_string(),
        parts: vec![Part {
            text: prompt_text.to_string(),
        }],
    });

    contents
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

/// Converts a successful API response into a reply.
///
/// Only the first candidate is consulted. Grounding chunks without a web
/// source are skipped; untitled sources get [`DEFAULT_CITATION_TITLE`].
/// A candidate without any text yields [`NO_RESPONSE_TEXT`] so the caller
/// always has something to display.
fn reply_from_response(response: GenerateContentResponse) -> GeneratedReply {
    let candidate = response
        .candidates
        .into_iter()
        .flatten()
        .next();

    let (text, citations) = match candidate {
        Some(candidate) => {
            let text = candidate
                .content
                .map(|content| {
                    content
                        .parts
                        .into_iter()
                        .filter_map(|part| part.text)
                        .collect::<Vec<_>>()
                        .join("")
                })
                .unwrap_or_default();

            let citations = candidate
                .grounding_metadata
                .map(|metadata| {
                    metadata
                        .grounding_chunks
                        .into_iter()
                        .filter_map(|chunk| chunk.web)
                        .map(|web| Citation {
                            title: web
                                .title
                                .filter(|title| !title.is_empty())
                                .unwrap_or_else(|| DEFAULT_CITATION_TITLE.to_string()),
                            uri: web.uri.unwrap_or_default(),
                            kind: Some(CitationKind::Search),
                        })
                        .collect()
                })
                .unwrap_or_default();

            (text, citations)
        }
        None => (String::new(), Vec::new()),
    };

    let text = if text.trim().is_empty() {
        NO_RESPONSE_TEXT.to_string()
    } else {
        text
    };

    GeneratedReply { text, citations }
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> BackendError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let kind = match status {
        StatusCode::TOO_MANY_REQUESTS => BackendErrorKind::RateLimit,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendErrorKind::Auth,
        StatusCode::BAD_REQUEST => BackendErrorKind::InvalidRequest,
        status if status.is_server_error() => BackendErrorKind::Server,
        _ => BackendErrorKind::Unknown,
    };

    let err = BackendError::new(kind, message);
    match retry_after {
        Some(delay) => err.with_retry_after(delay),
        None => err,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}
