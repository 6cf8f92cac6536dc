//! Line classification for prompt files.
//!
//! Every raw line from the `prompts` list falls into exactly one bucket:
//! - `P: ...` lines are directives sent to the model
//! - `Q...` / `A...` lines are transcript messages for display
//! - everything else is discarded
//!
//! Both the client and the page renderer go through [`classify_lines`], so the
//! rules cannot drift between the two.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::Message;

const DIRECTIVE_PREFIX: &str = "P:";

static MESSAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([QA]\d*):?\s*(.*)$").expect("static regex compile"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Directive(String),
    Message(Message),
    Discarded,
}

/// Directives and messages pulled out of one prompt list, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub directives: Vec<String>,
    pub messages: Vec<Message>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.messages.is_empty()
    }
}

pub fn classify_line(raw: &str) -> ClassifiedLine {
    let line = raw.trim();

    if let Some(payload) = line.strip_prefix(DIRECTIVE_PREFIX) {
        return ClassifiedLine::Directive(payload.trim().to_string());
    }

    if !line.starts_with(['Q', 'A']) {
        return ClassifiedLine::Discarded;
    }

    // The regex decides; the prefix check above only short-circuits.
    match MESSAGE_RE.captures(line) {
        Some(caps) => {
            let kind = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            if kind.is_empty() {
                ClassifiedLine::Discarded
            } else {
                ClassifiedLine::Message(Message::new(kind, text))
            }
        }
        None => ClassifiedLine::Discarded,
    }
}

pub fn classify_lines<I, S>(lines: I) -> Classification
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Classification::default();
    for line in lines {
        match classify_line(line.as_ref()) {
            ClassifiedLine::Directive(payload) => out.directives.push(payload),
            ClassifiedLine::Message(message) => out.messages.push(message),
            ClassifiedLine::Discarded => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_text_keeps_trailing_content() {
        // Trailing whitespace is already gone after trim, inner spacing is kept.
        assert_eq!(
            classify_line("  A2:   two  words  "),
            ClassifiedLine::Message(Message::new("A2", "two  words"))
        );
    }

    #[test]
    fn test_lowercase_prefix_is_discarded() {
        assert_eq!(classify_line("q: lower"), ClassifiedLine::Discarded);
        assert_eq!(classify_line("p: lower"), ClassifiedLine::Discarded);
    }
}
