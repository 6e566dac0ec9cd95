use thiserror::Error;

/// Errors raised while setting or reading localized content.
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The item to localize was absent.
    #[error("item must not be null")]
    NullItem,

    /// The language code is not shaped like `xx` or `xx-YY`.
    #[error("invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    /// The language code is well formed but not in the registry.
    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("localized content serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocalizationError>;
