//! Sending `P:` directives to the model.
//!
//! Every failure from the backend ends up inside the returned
//! [`ConversationResult`]; nothing here returns an error.

use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::ai::{CompletionBackend, SamplingParams, build_conversation};
use crate::core::config::DEFAULT_SINGLE_PROMPT_MAX_TOKENS;
use crate::core::models::ConversationResult;

pub const DEFAULT_SYSTEM_MESSAGE: &str =
    "You are a helpful assistant that provides clear, concise answers.";

/// The prompt file's `context`, or [`DEFAULT_SYSTEM_MESSAGE`] when it is blank.
pub fn system_message(context: Option<&str>) -> &str {
    context
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_SYSTEM_MESSAGE)
}

pub struct ConversationDriver<B> {
    backend: B,
    params: SamplingParams,
}

impl<B: CompletionBackend> ConversationDriver<B> {
    pub fn new(backend: B, params: SamplingParams) -> Self {
        Self { backend, params }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Sends all prompts as consecutive user turns of one conversation.
    pub async fn run_conversation(
        &self,
        prompts: &[String],
        system: Option<&str>,
    ) -> ConversationResult {
        let run_id = Uuid::new_v4();
        let span = info_span!("conversation", %run_id, prompts = prompts.len());

        async {
            info!("Sending {} prompts as single conversation", prompts.len());
            self.request(prompts.to_vec(), system, &self.params).await
        }
        .instrument(span)
        .await
    }

    /// Sends each prompt on its own, one request after another.
    pub async fn run_each(
        &self,
        prompts: &[String],
        system: Option<&str>,
    ) -> Vec<ConversationResult> {
        let run_id = Uuid::new_v4();
        let params = self
            .params
            .with_max_tokens(self.params.max_tokens.min(DEFAULT_SINGLE_PROMPT_MAX_TOKENS));

        let mut results = Vec::with_capacity(prompts.len());
        for (index, prompt) in prompts.iter().enumerate() {
            let span = info_span!("prompt", %run_id, index = index + 1);
            let result = self
                .request(vec![prompt.clone()], system, &params)
                .instrument(span)
                .await;
            results.push(result);
        }
        results
    }

    async fn request(
        &self,
        prompts: Vec<String>,
        system: Option<&str>,
        params: &SamplingParams,
    ) -> ConversationResult {
        let model = self.backend.model_name().to_string();
        let chat = build_conversation(system, &prompts);

        match self.backend.complete(chat, params).await {
            Ok(completion) => {
                info!(
                    "Completion succeeded ({} tokens)",
                    completion.usage.total_tokens
                );
                ConversationResult::succeeded(prompts, model, completion.text, completion.usage)
            }
            Err(e) => {
                error!("Completion failed: {}", e);
                ConversationResult::failed(prompts, model, e.to_string())
            }
        }
    }
}
