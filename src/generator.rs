//! Story generation against an external multimodal model.
//!
//! The model service speaks the Ollama chat API: a single user message
//! carrying a fixed prompt and the image bytes, one synchronous call, the
//! assistant's text returned verbatim.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::STORY_PROMPT;

/// Failures from the story generation boundary.
#[derive(Debug)]
pub enum GenerationError {
    /// The request to the model service failed outright
    Transport(reqwest::Error),
    /// The model service answered with a non-success status
    Api {
        /// HTTP status returned by the service
        status: u16,
        /// response body, for the logs
        body: String,
    },
    /// The response body could not be decoded
    Decode(String),
    /// The model returned an empty story
    EmptyResponse,
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Transport(err) => write!(f, "model request failed: {}", err),
            GenerationError::Api { status, body } => {
                write!(f, "model service returned {}: {}", status, body)
            }
            GenerationError::Decode(message) => {
                write!(f, "could not decode model response: {}", message)
            }
            GenerationError::EmptyResponse => write!(f, "model returned an empty story"),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Capability for turning image bytes into a short story.
///
/// Injected into the web state so handlers never talk to the model service
/// directly and tests can substitute a stub.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Generates a story inspired by the given image bytes.
    async fn generate_story(&self, image: &[u8]) -> Result<String, GenerationError>;
}

/// Client for an Ollama-compatible `/api/chat` endpoint.
pub struct OllamaGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGenerator {
    /// Builds a client for the given service URL and model identifier.
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
    images: Vec<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[async_trait]
impl StoryGenerator for OllamaGenerator {
    async fn generate_story(&self, image: &[u8]) -> Result<String, GenerationError> {
        let req_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: STORY_PROMPT,
                images: vec![general_purpose::STANDARD.encode(image)],
            }],
            stream: false,
        };

        debug!("Requesting story from {} ({})", self.base_url, self.model);
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&req_body)
            .send()
            .await
            .map_err(GenerationError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Decode(err.to_string()))?;

        let story = parsed.message.content.trim().to_string();
        if story.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(story)
    }
}
