use std::future::Future;

use eyre::{Result, bail};
use log::debug;
use serde::{Deserialize, Serialize};

/// Address Ollama listens on out of the box
pub const DEFAULT_HOST: &str = "http://localhost:11434";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Reply to a non-streaming chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
}

/// Language-model chat endpoint
pub trait ChatService {
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> impl Future<Output = Result<ChatResponse>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

/// Client for a local or remote Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    host: String,
}

impl OllamaClient {
    pub fn new(client: reqwest::Client, host: &str) -> Self {
        Self {
            client,
            host: normalize_host(host),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl ChatService for OllamaClient {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.host);
        debug!("Sending {} messages to {url} with model {model}", messages.len());

        let body = ChatRequest {
            model,
            messages,
            stream: false,
        };

        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Ollama API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        parse_chat_response(json)
    }
}

fn parse_chat_response(json: serde_json::Value) -> Result<ChatResponse> {
    if let Some(err) = json.get("error").and_then(|e| e.as_str()) {
        bail!("Ollama API error: {err}");
    }
    match serde_json::from_value(json) {
        Ok(resp) => Ok(resp),
        Err(e) => bail!("unexpected Ollama API response format: {e}"),
    }
}

/// Accepts `host:port` or a full URL, as `OLLAMA_HOST` does
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        DEFAULT_HOST.to_string()
    } else if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}
