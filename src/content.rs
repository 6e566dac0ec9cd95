//! Localized content: language-keyed string values and their stored form.
//!
//! A localized property holds a JSON array of `{"k": <language>, "v": <text>}`
//! objects. Writing always replaces the whole array.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single localized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedContent {
    /// Language key (e.g., "en", "ar")
    #[serde(rename = "k")]
    pub key: String,

    /// Text in that language
    #[serde(rename = "v")]
    pub value: String,
}

impl LocalizedContent {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// True when the value is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Encode a content sequence into its stored JSON form.
    pub fn serialize(contents: &[LocalizedContent]) -> Result<String> {
        Ok(serde_json::to_string(contents)?)
    }

    /// Decode the stored JSON form. A blank string decodes to no content.
    pub fn deserialize(raw: &str) -> Result<Vec<LocalizedContent>> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Pick the value for `language`, falling back to `fallback` when the
    /// requested entry is missing or blank. Returns an empty string when
    /// neither has a value.
    pub fn localize<'a>(
        contents: &'a [LocalizedContent],
        language: &str,
        fallback: &str,
    ) -> &'a str {
        let lookup = |key: &str| {
            contents
                .iter()
                .find(|c| c.key == key && !c.is_blank())
                .map(|c| c.value.as_str())
        };

        lookup(language).or_else(|| lookup(fallback)).unwrap_or("")
    }
}
