//! Prompt file loading.
//!
//! A prompt file is a YAML document:
//!
//! ```yaml
//! context: You are a terse assistant.
//! users:
//!   1: BG
//!   default: XY
//! prompts:
//!   - "P: What is the capital of France?"
//!   - "Q1: What is X?"
//!   - "A1: It is Y."
//! ```
//!
//! Loading never fails outright: a missing file or broken YAML is logged and
//! replaced by a fallback document chosen by the caller.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, error, info, warn};

use crate::errors::ChatlogError;
use crate::transcript::initials::UserInitials;

pub const DEFAULT_PROMPT_FILE: &str = "prompts.yaml";

pub const BUILTIN_CONTEXT: &str = "You are a helpful assistant.";

pub const BUILTIN_PROMPTS: [&str; 3] = [
    "P: What is the capital of France?",
    "P: Explain the concept of machine learning in simple terms.",
    "P: Write a Python function to calculate the factorial of a number.",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDocument {
    pub prompts: Vec<String>,
    pub users: UserInitials,
    pub context: Option<String>,
}

impl PromptDocument {
    pub fn builtin() -> Self {
        Self {
            prompts: BUILTIN_PROMPTS.iter().map(|p| p.to_string()).collect(),
            users: UserInitials::default(),
            context: Some(BUILTIN_CONTEXT.to_string()),
        }
    }
}

/// What to hand back when the prompt file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFile {
    UseBuiltinPrompts,
    UseEmpty,
}

impl MissingFile {
    fn document(self) -> PromptDocument {
        match self {
            MissingFile::UseBuiltinPrompts => PromptDocument::builtin(),
            MissingFile::UseEmpty => PromptDocument::default(),
        }
    }
}

pub fn load_document(path: &Path, on_missing: MissingFile) -> PromptDocument {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            match on_missing {
                MissingFile::UseBuiltinPrompts => {
                    warn!("{} not found. Using default prompts.", path.display())
                }
                MissingFile::UseEmpty => warn!("{} not found.", path.display()),
            }
            return on_missing.document();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return on_missing.document();
        }
    };

    match parse_document(&raw) {
        Ok(doc) => {
            info!(
                "Loaded {} prompt lines and {} user labels from {}",
                doc.prompts.len(),
                doc.users.len(),
                path.display()
            );
            doc
        }
        Err(e) => {
            error!("Error loading prompts from {}: {}", path.display(), e);
            PromptDocument::default()
        }
    }
}

pub fn parse_document(raw: &str) -> Result<PromptDocument, ChatlogError> {
    let root: Value = serde_yaml::from_str(raw)?;

    let map = match root {
        Value::Null => return Ok(PromptDocument::default()),
        Value::Mapping(map) => map,
        other => {
            return Err(ChatlogError::ParseError(format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            )));
        }
    };

    let prompts = match map.get("prompts") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(items)) => items.iter().filter_map(raw_line).collect(),
        Some(other) => {
            return Err(ChatlogError::ParseError(format!(
                "`prompts` must be a list, found {}",
                value_kind(other)
            )));
        }
    };

    let users = match map.get("users") {
        None | Some(Value::Null) => UserInitials::default(),
        Some(Value::Mapping(entries)) => {
            let normalized: BTreeMap<String, String> = entries
                .iter()
                .filter_map(|(k, v)| Some((scalar_text(k)?, scalar_text(v)?)))
                .collect();
            UserInitials::new(normalized)
        }
        Some(other) => {
            return Err(ChatlogError::ParseError(format!(
                "`users` must be a mapping, found {}",
                value_kind(other)
            )));
        }
    };

    let context = map
        .get("context")
        .and_then(scalar_text)
        .filter(|c| !c.trim().is_empty());

    Ok(PromptDocument {
        prompts,
        users,
        context,
    })
}

/// Turns one `prompts` entry back into a line of text.
///
/// An unquoted `- Q1: What is X?` reaches us as a one-entry mapping, so it is
/// joined back into `Q1: What is X?`.
fn raw_line(value: &Value) -> Option<String> {
    if let Some(text) = scalar_text(value) {
        return Some(text);
    }

    if let Value::Mapping(map) = value
        && map.len() == 1
    {
        let (k, v) = map.iter().next()?;
        let key = scalar_text(k)?;
        let rest = match v {
            Value::Null => String::new(),
            other => scalar_text(other)?,
        };
        return Some(format!("{key}: {rest}"));
    }

    debug!("Skipping prompt entry of type {}", value_kind(value));
    None
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
