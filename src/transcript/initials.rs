use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::models::Message;

/// Label used when neither the numbered entry nor `default` exists.
pub const FALLBACK_INITIALS: &str = "BG";
pub const DEFAULT_KEY: &str = "default";

/// Avatar labels keyed by answer suffix (`"1"` for `A1`), plus an optional
/// `default` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInitials(BTreeMap<String, String>);

impl UserInitials {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Initials for an answer type such as `"A3"`.
    ///
    /// Mirrors the lookup done by the page script: numbered entry, then
    /// `default`, then [`FALLBACK_INITIALS`]. Empty labels count as missing.
    pub fn resolve(&self, kind: &str) -> &str {
        let numbered = Message::new(kind, "")
            .suffix()
            .and_then(|digits| self.get(digits))
            .filter(|label| !label.is_empty());

        numbered
            .or_else(|| self.get(DEFAULT_KEY).filter(|label| !label.is_empty()))
            .unwrap_or(FALLBACK_INITIALS)
    }
}

impl<K, V> FromIterator<(K, V)> for UserInitials
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
