//! Chat-completion client for OpenAI-compatible endpoints (Groq by default).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// System instruction sent ahead of every drafting prompt.
pub const SYSTEM_PROMPT: &str = "\
You are a legal contract drafting assistant. Write professional, clearly formatted, \
compliant contracts using formal language and legal structure. Never offer legal advice.";

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("missing API credential: set GROQ_API_KEY or pass --api-key")]
    MissingCredential,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("completion response contained no text")]
    EmptyResponse,
}

impl CompletionError {
    /// Short stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "config",
            Self::Http(_) => "transport",
            Self::Server { .. } => "server",
            Self::Json(_) => "malformed-response",
            Self::EmptyResponse => "empty-response",
        }
    }
}

/// Anything that can turn a prompt into generated contract text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Connection settings for the completion service.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    /// Like `https://api.groq.com/openai/v1` (no trailing slash needed).
    pub base_url: String,
    pub model: String,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

// ── Wire types ──

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// HTTP client for a single chat-completion call per prompt.
///
/// Sampling is deterministic (temperature 0). There is no retry and no
/// timeout beyond what the transport imposes.
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl CompletionClient {
    /// Build a client, failing fast when the credential is absent.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(CompletionError::MissingCredential);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.0,
        }
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);

        info!(url = %url, model = %self.model, prompt_len = prompt.len(), "requesting completion");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let text = parse_completion(&body)?;
        info!(chars = text.len(), "completion received");
        Ok(text)
    }
}

/// Extract the first choice's text from a chat-completion response body.
fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if text.is_empty() {
        debug!("completion had no choices or empty content");
        return Err(CompletionError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CompletionClient {
        CompletionClient::new(CompletionConfig::new("gsk_test")).unwrap()
    }

    #[test]
    fn missing_credential_fails_at_construction() {
        let err = CompletionClient::new(CompletionConfig::new("")).err().unwrap();
        assert!(matches!(err, CompletionError::MissingCredential));
        assert_eq!(err.kind(), "config");

        let err = CompletionClient::new(CompletionConfig::new("   ")).err().unwrap();
        assert!(matches!(err, CompletionError::MissingCredential));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let mut config = CompletionConfig::new("gsk_test");
        config.base_url = "http://localhost:8080/v1/".into();
        let client = CompletionClient::new(config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/v1");
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[test]
    fn request_body_is_two_message_conversation_at_zero_temperature() {
        let client = client();
        let json = serde_json::to_value(client.request_body("Draft a lease")).unwrap();
        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["temperature"], 0.0);
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Draft a lease");
    }

    #[test]
    fn parse_takes_first_choice_trimmed() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "\n  RENTAL AGREEMENT\nARTICLE 1  \n"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ],
            "usage": {"total_tokens": 42}
        }"#;
        assert_eq!(parse_completion(body).unwrap(), "RENTAL AGREEMENT\nARTICLE 1");
    }

    #[test]
    fn parse_rejects_missing_choices() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, CompletionError::EmptyResponse));
        let err = parse_completion(r#"{"object": "chat.completion"}"#).unwrap_err();
        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[test]
    fn parse_rejects_null_or_blank_content() {
        let err = parse_completion(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::EmptyResponse));
        let err = parse_completion(r#"{"choices": [{"message": {"content": "   "}}]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_completion("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CompletionError::Json(_)));
        assert_eq!(err.kind(), "malformed-response");
    }

    #[tokio::test]
    async fn unreachable_service_is_transport_error() {
        let mut config = CompletionConfig::new("gsk_test");
        config.base_url = "http://127.0.0.1:1".into();
        let client = CompletionClient::new(config).unwrap();
        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionError::Http(_)), "got {err:?}");
        assert_eq!(err.kind(), "transport");
    }
}
