//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat completions call used by the client binary.

use std::time::Duration;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};
use url::Url;

use crate::core::config::{
    AppConfig, DEFAULT_BASE_URL, DEFAULT_CONVERSATION_MAX_TOKENS, DEFAULT_SEED,
    DEFAULT_TEMPERATURE,
};
use crate::core::models::Usage;
use crate::errors::ChatlogError;

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Request knobs sent with every completion. With the defaults the model
/// answers the same prompt the same way run after run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub seed: i64,
    pub max_tokens: i64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            seed: DEFAULT_SEED,
            max_tokens: DEFAULT_CONVERSATION_MAX_TOKENS,
        }
    }
}

impl SamplingParams {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            temperature: config.temperature,
            seed: config.seed,
            max_tokens: config.max_tokens,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_tokens(self, max_tokens: i64) -> Self {
        Self { max_tokens, ..self }
    }
}

/// Text and token accounting returned by one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
}

/// Anything that can turn a message list into a completion.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    fn model_name(&self) -> &str;

    async fn complete(
        &self,
        messages: Vec<ChatCompletionMessage>,
        params: &SamplingParams,
    ) -> Result<Completion, ChatlogError>;
}

fn chat_message(role: MessageRole, text: &str) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(text.to_string()),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

/// System message (when non-empty) followed by one user turn per prompt.
#[must_use]
pub fn build_conversation(
    system: Option<&str>,
    prompts: &[String],
) -> Vec<ChatCompletionMessage> {
    let mut chat = Vec::with_capacity(prompts.len() + 1);

    if let Some(system) = system.filter(|s| !s.trim().is_empty()) {
        chat.push(chat_message(MessageRole::system, system));
    }

    chat.extend(
        prompts
            .iter()
            .map(|prompt| chat_message(MessageRole::user, prompt)),
    );

    chat
}

#[must_use]
pub fn build_request_body(
    model: &str,
    messages: &[ChatCompletionMessage],
    params: &SamplingParams,
) -> Value {
    let wire_messages: Vec<Value> = messages
        .iter()
        .map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            let content_val = match &msg.content {
                Content::Text(text) => json!(text),
                // Only text turns are ever built.
                Content::ImageUrl(_) => json!(""),
            };

            json!({
                "role": role_str,
                "content": content_val
            })
        })
        .collect();

    json!({
        "model": model,
        "messages": wire_messages,
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
        "top_p": params.top_p,
        "frequency_penalty": params.frequency_penalty,
        "presence_penalty": params.presence_penalty,
        "seed": params.seed
    })
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Pulls the first choice's text and the usage block out of a response body.
///
/// # Errors
///
/// Returns `OpenAIError` if the body has no choices or the first choice has
/// no text content.
pub fn parse_completion(body: Value) -> Result<Completion, ChatlogError> {
    let parsed: CompletionBody = serde_json::from_value(body).map_err(|e| {
        ChatlogError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
    })?;

    let text = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ChatlogError::OpenAIError("No text in response".to_string()))?;

    Ok(Completion {
        text,
        usage: parsed.usage,
    })
}

/// Best-effort human-readable message from an error response body.
fn describe_error_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// LLM API client for chat completions
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
    http: Client,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, model_name: String) -> Self {
        Self {
            api_key,
            org_id,
            model_name,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.model_name().to_string(),
        )
        .with_base_url(config.openai_base_url.clone())
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model_name: String) -> Self {
        self.model_name = model_name;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }

    fn headers(&self) -> Result<reqwest::header::HeaderMap, ChatlogError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| ChatlogError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| ChatlogError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                ChatlogError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn complete(
        &self,
        messages: Vec<ChatCompletionMessage>,
        params: &SamplingParams,
    ) -> Result<Completion, ChatlogError> {
        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", messages);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting completion from {} with {} messages",
            self.model_name,
            messages.len()
        );

        let request_body = build_request_body(&self.model_name, &messages, params);

        let response = self
            .http
            .post(self.endpoint())
            .headers(self.headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ChatlogError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(ChatlogError::OpenAIError(format!(
                "OpenAI API error (status {status}): {}",
                describe_error_body(&error_text)
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            ChatlogError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let completion = parse_completion(response_json)?;
        debug!(
            "Completion used {} prompt + {} completion tokens",
            completion.usage.prompt_tokens, completion.usage.completion_tokens
        );
        Ok(completion)
    }
}
