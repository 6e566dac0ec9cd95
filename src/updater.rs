//! Set a localized property and reconcile its validation errors.
//!
//! Form binding usually flags a localized property as missing, because the
//! form posts the per-language values separately from the property itself.
//! Once the per-language values are written and every required language is
//! filled in, that stale error is cleared.

use crate::content::LocalizedContent;
use crate::error::{LocalizationError, Result};
use crate::i18n::RequiredLanguages;
use crate::localizable::Localizable;
use crate::model_state::ModelStateDictionary;
use crate::property::Property;
use tracing::debug;

/// Writes localized content and clears errors for complete content.
#[derive(Debug, Clone, Default)]
pub struct LocalizedPropertyUpdater {
    required: RequiredLanguages,
}

impl LocalizedPropertyUpdater {
    pub fn new(required: RequiredLanguages) -> Self {
        Self { required }
    }

    pub fn required(&self) -> &RequiredLanguages {
        &self.required
    }

    /// Overwrite `property` on `item` with `contents`, then clear the
    /// property's errors in `errors` if every required language has a
    /// non-blank value.
    ///
    /// Errors are looked up by suffix, so both `"Name"` and `"Product.Name"`
    /// match a property named `Name`. At most one entry, the first one that
    /// currently holds errors, is cleared. Errors are never added here.
    ///
    /// # Arguments
    /// * `item` - The model to update; `None` is rejected
    /// * `property` - The localized property to overwrite
    /// * `contents` - The new per-language values, replacing any stored ones
    /// * `errors` - The validation state from form binding
    ///
    /// # Returns
    /// The same item that was passed in, for chaining.
    ///
    /// # Errors
    /// * `NullItem` if `item` is `None`; nothing is mutated
    /// * `Serialization` if the content cannot be stored
    pub fn apply<'a, T: Localizable>(
        &self,
        item: Option<&'a mut T>,
        property: &Property<T>,
        contents: &[LocalizedContent],
        errors: &mut ModelStateDictionary,
    ) -> Result<&'a mut T> {
        let item = item.ok_or(LocalizationError::NullItem)?;

        item.set_localized(property, contents)?;

        let missing = self.required.missing(contents);
        if !missing.is_empty() {
            debug!(
                property = property.name(),
                ?missing,
                "Localized content incomplete, keeping validation errors"
            );
            return Ok(item);
        }

        if let Some(key) = errors.clear_errors_for_suffix(property.name()) {
            debug!(property = property.name(), key, "Cleared validation errors");
        }

        Ok(item)
    }
}

/// Method-call form of [`LocalizedPropertyUpdater::apply`].
pub trait SetLocalized: Localizable {
    fn set_localized_validated(
        &mut self,
        updater: &LocalizedPropertyUpdater,
        errors: &mut ModelStateDictionary,
        property: &Property<Self>,
        contents: &[LocalizedContent],
    ) -> Result<&mut Self> {
        updater.apply(Some(self), property, contents, errors)
    }
}

impl<T: Localizable> SetLocalized for T {}
