use crate::i18n::{Language, RequiredLanguages};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Localization
    pub required_languages: Vec<Language>,
    pub default_language: Language,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            required_languages: parse_languages(
                &std::env::var("REQUIRED_LANGUAGES").unwrap_or_else(|_| "en".to_string()),
            )
            .context("REQUIRED_LANGUAGES is invalid")?,
            default_language: Language::from_code(
                &std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            )
            .context("DEFAULT_LANGUAGE is invalid")?,

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }

    pub fn required(&self) -> RequiredLanguages {
        RequiredLanguages::from_languages(&self.required_languages)
    }
}

/// Parse a comma-separated list of language codes. Blank items are skipped
/// and duplicates keep their first position.
fn parse_languages(raw: &str) -> Result<Vec<Language>> {
    let mut languages: Vec<Language> = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let language = Language::from_code(code)?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    Ok(languages)
}
