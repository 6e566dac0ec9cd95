//! Language handling for localized content.
//!
//! # Architecture
//!
//! - `registry`: the table of known languages and the default language
//! - `language`: validated `Language` codes
//! - `required`: the injected set of languages content must fill in
//!
//! # Example
//!
//! ```rust
//! use localized_content::i18n::{Language, RequiredLanguages};
//!
//! let arabic = Language::from_code("ar").unwrap();
//! let required = RequiredLanguages::from_languages(&[Language::ENGLISH, arabic]);
//! assert!(required.contains("ar"));
//! ```

mod language;
mod registry;
mod required;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use required::RequiredLanguages;
