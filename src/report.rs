//! Console text for both binaries.
//!
//! Everything here returns a `String`; the binaries decide where it goes.

use std::fmt::Write as _;

use crate::core::models::{ConversationResult, Message};

const WIDE_RULE: usize = 80;
const RULE: usize = 60;
const SUMMARY_RULE: usize = 50;
const NARROW_RULE: usize = 40;
const CONTEXT_PREVIEW_CHARS: usize = 100;

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Echo of the Q/A lines the client skips, one `[Display] T: text` per line.
pub fn format_display_lines(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("[Display] {}: {}\n", m.kind, m.text))
        .collect()
}

/// Header printed before the conversation is sent.
pub fn format_session_header(model: &str, prompt_count: usize, system_message: &str) -> String {
    let preview: String = system_message.chars().take(CONTEXT_PREVIEW_CHARS).collect();
    format!(
        "Model: {model}\nNumber of prompts for LLM: {prompt_count}\nContext: {preview}...\n"
    )
}

pub fn format_conversation_report(result: &ConversationResult) -> String {
    let mut out = String::new();
    match (result.response(), result.usage()) {
        (Some(response), Some(usage)) if result.success() => {
            let _ = writeln!(
                out,
                "\n✓ Single conversation completed ({} tokens)",
                usage.total_tokens
            );
            let _ = writeln!(out, "\nLLM Response:");
            let _ = writeln!(out, "{}", rule('=', RULE));
            let _ = writeln!(out, "{response}");
            let _ = writeln!(out, "{}", rule('=', RULE));
            let _ = writeln!(out, "\nTokens used: {}", usage.total_tokens);
        }
        _ => {
            let _ = writeln!(out, "✗ Error: {}", result.error().unwrap_or("Unknown error"));
        }
    }
    out
}

/// Per-prompt blocks followed by a success/token footer.
pub fn format_batch_report(results: &[ConversationResult]) -> String {
    let mut out = String::new();
    let wide = rule('=', WIDE_RULE);

    let _ = writeln!(out, "\n{wide}");
    let _ = writeln!(out, "CHATGPT INTERACTION RESULTS");
    let _ = writeln!(out, "{wide}");

    let mut total_tokens: u64 = 0;
    let mut successful = 0usize;

    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(out, "\nPROMPT {}:", i + 1);
        let _ = writeln!(out, "Q: {}", result.prompts().join("\n"));
        let _ = writeln!(out, "{}", rule('-', NARROW_RULE));

        if result.success() {
            let _ = writeln!(out, "A: {}", result.response().unwrap_or_default());
            let _ = writeln!(out, "Tokens used: {}", result.total_tokens());
            total_tokens += u64::from(result.total_tokens());
            successful += 1;
        } else {
            let _ = writeln!(out, "ERROR: {}", result.error().unwrap_or("Unknown error"));
        }
    }

    let _ = writeln!(out, "\n{wide}");
    let _ = writeln!(out, "SUMMARY:");
    let _ = writeln!(out, "Successful requests: {}/{}", successful, results.len());
    let _ = writeln!(out, "Total tokens used: {total_tokens}");
    let _ = writeln!(out, "{wide}");
    out
}

pub fn format_transcript_summary(source: &str, messages: &[Message]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Q&A Summary from {source}:");
    let _ = writeln!(out, "{}", rule('=', SUMMARY_RULE));
    for m in messages {
        let _ = writeln!(out, "{}: {}", m.kind, m.text);
    }
    let _ = writeln!(out, "{}", rule('=', SUMMARY_RULE));
    out
}
