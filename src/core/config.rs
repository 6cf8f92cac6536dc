use std::env;
use std::str::FromStr;

use url::Url;

use crate::errors::ChatlogError;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_SEED: i64 = 42;
pub const DEFAULT_CONVERSATION_MAX_TOKENS: i64 = 2000;
pub const DEFAULT_SINGLE_PROMPT_MAX_TOKENS: i64 = 1000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Url,
    pub temperature: f64,
    pub seed: i64,
    pub max_tokens: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ChatlogError> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ChatlogError::ConfigError(
                    "OpenAI API key is required. Set the OPENAI_API_KEY environment variable."
                        .to_string(),
                )
            })?;

        let base = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let openai_base_url = Url::parse(&base)
            .map_err(|e| ChatlogError::ConfigError(format!("OPENAI_BASE_URL: {}", e)))?;

        Ok(Self {
            openai_api_key,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
            openai_base_url,
            temperature: parse_var("OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            seed: parse_var("OPENAI_SEED", DEFAULT_SEED)?,
            max_tokens: parse_var("OPENAI_MAX_TOKENS", DEFAULT_CONVERSATION_MAX_TOKENS)?,
        })
    }

    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, ChatlogError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| ChatlogError::ConfigError(format!("{}: {}", name, e))),
        _ => Ok(default),
    }
}
