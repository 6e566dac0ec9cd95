//! The set of languages that must be filled in for content to be complete.

use crate::content::LocalizedContent;
use crate::i18n::Language;
use std::collections::BTreeSet;

/// Language keys that must carry a non-blank value.
///
/// Immutable once built; inject it wherever the completeness rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredLanguages {
    keys: BTreeSet<String>,
}

impl RequiredLanguages {
    /// Build from raw keys. Keys are matched against content verbatim.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_languages(languages: &[Language]) -> Self {
        Self::new(languages.iter().map(|l| l.code()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Required keys that `contents` does not fill in.
    ///
    /// A required key is missing when no entry carries it, or when any entry
    /// carrying it is blank. Duplicate entries do not paper over a blank one.
    ///
    /// # Arguments
    /// * `contents` - The localized values to check
    ///
    /// # Returns
    /// The missing keys in sorted order; empty when the content is complete.
    pub fn missing(&self, contents: &[LocalizedContent]) -> Vec<&str> {
        self.iter()
            .filter(|key| {
                let mut entries = contents.iter().filter(|c| c.key == *key).peekable();
                entries.peek().is_none() || entries.any(|c| c.is_blank())
            })
            .collect()
    }

    pub fn is_satisfied_by(&self, contents: &[LocalizedContent]) -> bool {
        self.missing(contents).is_empty()
    }
}

impl Default for RequiredLanguages {
    fn default() -> Self {
        Self::from_languages(&[Language::default_language()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_fr() -> RequiredLanguages {
        RequiredLanguages::new(["en", "fr"])
    }

    #[test]
    fn test_default_requires_english_only() {
        let required = RequiredLanguages::default();
        assert_eq!(required.len(), 1);
        assert!(required.contains("en"));
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(RequiredLanguages::new(["en", "en", "fr"]).len(), 2);
    }

    #[test]
    fn test_all_present_is_satisfied() {
        let contents = vec![
            LocalizedContent::new("en", "Hello"),
            LocalizedContent::new("fr", "Bonjour"),
        ];
        assert!(en_fr().is_satisfied_by(&contents));
    }

    #[test]
    fn test_empty_value_is_missing() {
        let contents = vec![
            LocalizedContent::new("en", "Hello"),
            LocalizedContent::new("fr", ""),
        ];
        assert_eq!(en_fr().missing(&contents), vec!["fr"]);
    }

    #[test]
    fn test_whitespace_value_is_missing() {
        let contents = vec![
            LocalizedContent::new("en", "  "),
            LocalizedContent::new("fr", "Bonjour"),
        ];
        assert_eq!(en_fr().missing(&contents), vec!["en"]);
    }

    #[test]
    fn test_absent_key_is_missing() {
        let contents = vec![LocalizedContent::new("en", "Hello")];
        assert!(!en_fr().is_satisfied_by(&contents));
    }

    #[test]
    fn test_blank_duplicate_is_missing() {
        let required = RequiredLanguages::new(["en"]);
        let contents = vec![
            LocalizedContent::new("en", ""),
            LocalizedContent::new("en", "Hello"),
        ];
        assert_eq!(required.missing(&contents), vec!["en"]);
    }

    #[test]
    fn test_filled_duplicates_are_satisfied() {
        let required = RequiredLanguages::new(["en"]);
        let contents = vec![
            LocalizedContent::new("en", "Hi"),
            LocalizedContent::new("en", "Hello"),
        ];
        assert!(required.is_satisfied_by(&contents));
    }

    #[test]
    fn test_empty_contents_is_unsatisfied() {
        assert_eq!(en_fr().missing(&[]), vec!["en", "fr"]);
    }

    #[test]
    fn test_extra_languages_are_ignored() {
        let contents = vec![
            LocalizedContent::new("en", "Hello"),
            LocalizedContent::new("fr", "Bonjour"),
            LocalizedContent::new("ar", ""),
        ];
        assert!(en_fr().is_satisfied_by(&contents));
    }

    #[test]
    fn test_nothing_required_is_always_satisfied() {
        let required = RequiredLanguages::new(Vec::<String>::new());
        assert!(required.is_empty());
        assert!(required.is_satisfied_by(&[]));
    }
}
