//! All AI/LLM functionality

pub mod client;

// Re-export main types for convenience
pub use client::{
    Completion, CompletionBackend, LlmClient, SamplingParams, build_conversation,
    build_request_body, parse_completion,
};
