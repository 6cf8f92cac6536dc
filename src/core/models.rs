use serde::{Deserialize, Serialize};

/// A display line of the transcript, either a question (`Q`, `Q1`, ...) or an
/// answer (`A`, `A3`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl Message {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Digits following the role letter, if any (`"A12"` -> `Some("12")`).
    pub fn suffix(&self) -> Option<&str> {
        let digits = self.kind.get(1..)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(digits)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Outcome of one request to the model.
///
/// Either `response` and `usage` are set (`success == true`) or `error` is
/// set (`success == false`), never both. Construct through
/// [`ConversationResult::succeeded`] or [`ConversationResult::failed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationResult {
    prompts: Vec<String>,
    model: String,
    response: Option<String>,
    usage: Option<Usage>,
    success: bool,
    error: Option<String>,
}

impl ConversationResult {
    pub fn succeeded(
        prompts: Vec<String>,
        model: impl Into<String>,
        response: String,
        usage: Usage,
    ) -> Self {
        Self {
            prompts,
            model: model.into(),
            response: Some(response),
            usage: Some(usage),
            success: true,
            error: None,
        }
    }

    pub fn failed(
        prompts: Vec<String>,
        model: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = "Unknown error".to_string();
        }
        Self {
            prompts,
            model: model.into(),
            response: None,
            usage: None,
            success: false,
            error: Some(error),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn usage(&self) -> Option<Usage> {
        self.usage
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total_tokens(&self) -> u32 {
        self.usage.map_or(0, |u| u.total_tokens)
    }
}
