use openai_api_rs::v1::error::APIError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatlogError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse prompt file: {0}")]
    ParseError(String),

    #[error("Failed to read or write file: {0}")]
    IoError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to render transcript template: {0}")]
    TemplateError(String),
}

impl From<reqwest::Error> for ChatlogError {
    fn from(error: reqwest::Error) -> Self {
        ChatlogError::HttpError(error.to_string())
    }
}

impl From<serde_yaml::Error> for ChatlogError {
    fn from(error: serde_yaml::Error) -> Self {
        ChatlogError::ParseError(error.to_string())
    }
}

impl From<serde_json::Error> for ChatlogError {
    fn from(error: serde_json::Error) -> Self {
        ChatlogError::TemplateError(error.to_string())
    }
}

impl From<std::io::Error> for ChatlogError {
    fn from(error: std::io::Error) -> Self {
        ChatlogError::IoError(error.to_string())
    }
}

impl From<anyhow::Error> for ChatlogError {
    fn from(error: anyhow::Error) -> Self {
        ChatlogError::OpenAIError(error.to_string())
    }
}

impl From<APIError> for ChatlogError {
    fn from(error: APIError) -> Self {
        ChatlogError::OpenAIError(format!("OpenAI API error: {}", error))
    }
}
