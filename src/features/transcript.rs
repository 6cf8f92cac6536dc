use std::path::Path;

use tracing::info;

use crate::core::models::Message;
use crate::errors::ChatlogError;
use crate::render::render_page;
use crate::transcript::{PromptDocument, classify_lines};

/// Rendered chat history page together with the messages it shows.
#[derive(Debug, Clone)]
pub struct TranscriptPage {
    pub messages: Vec<Message>,
    pub html: String,
}

/// Builds the page for a prompt document, or `None` when it has no Q/A lines.
pub fn build_transcript_page(
    doc: &PromptDocument,
) -> Result<Option<TranscriptPage>, ChatlogError> {
    let messages = classify_lines(&doc.prompts).messages;
    if messages.is_empty() {
        return Ok(None);
    }

    let html = render_page(&messages, &doc.users)?;
    info!(
        "Rendered {} messages into {} bytes of HTML",
        messages.len(),
        html.len()
    );
    Ok(Some(TranscriptPage { messages, html }))
}

pub fn write_transcript_page(path: &Path, page: &TranscriptPage) -> Result<(), ChatlogError> {
    std::fs::write(path, page.html.as_bytes()).map_err(|e| {
        ChatlogError::IoError(format!("Failed to write {}: {}", path.display(), e))
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}
