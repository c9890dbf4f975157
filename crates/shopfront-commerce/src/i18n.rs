//! UI language and translation dictionaries.
//!
//! Dictionaries are nested JSON objects loaded per language from
//! `i18n/{lang}.json`. Keys use dotted paths such as `"home.cta_shop"`.
//! Only string leaves resolve; a missing dictionary behaves as empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages written right to left.
const RTL_LANGUAGES: &[&str] = &["ar"];

/// A UI language, identified by its lowercase ISO 639-1 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_lowercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Whether the layout direction is right to left.
    pub fn is_rtl(&self) -> bool {
        RTL_LANGUAGES.contains(&self.0.as_str())
    }

    /// File name of this language's dictionary, e.g. `ar.json`.
    pub fn dictionary_file(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A translation dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(serde_json::Value);

impl Dictionary {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Resolve a dotted key. Returns `None` if any segment is missing or the
    /// leaf is not a string.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(&self.0, |node, segment| node.get(segment))
            .and_then(|leaf| leaf.as_str())
    }

    /// Resolve `key`, or fall back to the text already on screen.
    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(fallback)
    }
}
