//! Validation error store keyed by field path.
//!
//! Keys are field paths as produced by form binding, e.g. `"Name"` for a flat
//! model or `"Product.Name"` for a nested one. Entries are kept sorted by key.

use serde::Serialize;
use std::collections::BTreeMap;

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelError {
    pub message: String,
}

impl ModelError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validation state of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelState {
    pub errors: Vec<ModelError>,
}

impl ModelState {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Field path -> validation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelStateDictionary {
    entries: BTreeMap<String, ModelState>,
}

impl ModelStateDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against `key`, creating the entry if needed.
    pub fn add_model_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .errors
            .push(ModelError::new(message));
    }

    pub fn get(&self, key: &str) -> Option<&ModelState> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no entry holds an error.
    pub fn is_valid(&self) -> bool {
        self.entries.values().all(|state| !state.has_errors())
    }

    pub fn error_count(&self) -> usize {
        self.entries.values().map(|state| state.errors.len()).sum()
    }

    /// Clear the errors of the first entry whose key ends with `name` and that
    /// currently holds at least one error.
    ///
    /// Matching is a plain suffix test, so `"Name"` matches `"Product.Name"`
    /// and also `"ShortName"`. The entry itself is kept.
    ///
    /// # Arguments
    /// * `name` - The property name to match against entry keys
    ///
    /// # Returns
    /// * `Some(key)` of the entry that was cleared
    /// * `None` if no entry with errors matched
    pub fn clear_errors_for_suffix(&mut self, name: &str) -> Option<&str> {
        let (key, state) = self
            .entries
            .iter_mut()
            .find(|(key, state)| key.ends_with(name) && state.has_errors())?;

        state.errors.clear();
        Some(key.as_str())
    }

    /// Messages grouped by field, for error responses.
    pub fn to_error_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .iter()
            .filter(|(_, state)| state.has_errors())
            .map(|(key, state)| {
                (
                    key.clone(),
                    state.errors.iter().map(|e| e.message.clone()).collect(),
                )
            })
            .collect()
    }
}
