//! Language type: a code validated against the registry.

use crate::error::{LocalizationError, Result};
use crate::i18n::LanguageRegistry;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// A validated, enabled language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ar")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const ARABIC: Language = Language { code: "ar" };
    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from a language code string.
    ///
    /// Accepts `xx` or a regional `xx-YY` tag; a regional tag resolves to its
    /// base language. Surrounding whitespace is ignored and the base code is
    /// matched lowercase.
    ///
    /// # Arguments
    /// * `code` - The language tag (e.g., "ar", "fr-CA")
    ///
    /// # Returns
    /// * `Ok(Language)` if the base code is registered and enabled
    ///
    /// # Errors
    /// * `InvalidLanguageCode` if the code is not shaped like a language tag
    /// * `UnknownLanguage` if the code is not registered or is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let trimmed = code.trim();
        let regex = CODE_REGEX
            .get_or_init(|| Regex::new(r"^([A-Za-z]{2})(?:[-_][A-Za-z]{2})?$").unwrap());

        let base = regex
            .captures(trimmed)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_ascii_lowercase())
            .ok_or_else(|| LocalizationError::InvalidLanguageCode(code.to_string()))?;

        let registry = LanguageRegistry::get();
        if !registry.is_enabled(&base) {
            return Err(LocalizationError::UnknownLanguage(code.to_string()));
        }

        registry
            .get_by_code(&base)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| LocalizationError::UnknownLanguage(code.to_string()))
    }

    /// The registry's default language, used as the read fallback.
    pub fn default_language() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
