//! Localized model properties with validation-state reconciliation.
//!
//! A localized property stores per-language values as JSON. When a model is
//! bound from a form, the property is typically flagged as required before
//! its per-language values are applied. [`LocalizedPropertyUpdater`] writes
//! those values and clears the stale error once every required language has
//! a non-blank value.
//!
//! ```rust
//! use localized_content::{
//!     localized_property, Localizable, LocalizedContent, LocalizedPropertyUpdater,
//!     ModelStateDictionary, RequiredLanguages, SetLocalized,
//! };
//!
//! #[derive(Default)]
//! struct Product { name: String }
//! impl Localizable for Product {}
//!
//! let updater = LocalizedPropertyUpdater::new(RequiredLanguages::new(["en", "fr"]));
//! let mut errors = ModelStateDictionary::new();
//! errors.add_model_error("Product.Name", "The Name field is required.");
//!
//! let mut product = Product::default();
//! product
//!     .set_localized_validated(
//!         &updater,
//!         &mut errors,
//!         &localized_property!(Product, name, "Name"),
//!         &[LocalizedContent::new("en", "Hello"), LocalizedContent::new("fr", "Bonjour")],
//!     )
//!     .unwrap();
//!
//! assert!(errors.is_valid());
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod localizable;
pub mod model_state;
pub mod property;
pub mod server;
pub mod updater;
pub mod validation;

pub use content::LocalizedContent;
pub use error::LocalizationError;
pub use i18n::{Language, RequiredLanguages};
pub use localizable::Localizable;
pub use model_state::ModelStateDictionary;
pub use property::Property;
pub use updater::{LocalizedPropertyUpdater, SetLocalized};
