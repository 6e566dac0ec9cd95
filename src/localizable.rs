use crate::content::LocalizedContent;
use crate::error::Result;
use crate::i18n::Language;
use crate::property::Property;

/// A model whose string properties may hold localized content.
///
/// The provided methods store content as its JSON form directly in the
/// property. Override `set_localized` if a model keeps content elsewhere.
pub trait Localizable: Sized {
    /// Overwrite `property` with `contents`. Previous content is discarded.
    fn set_localized(
        &mut self,
        property: &Property<Self>,
        contents: &[LocalizedContent],
    ) -> Result<()> {
        *property.get_mut(self) = LocalizedContent::serialize(contents)?;
        Ok(())
    }

    /// All content currently stored in `property`.
    fn localized_contents(&self, property: &Property<Self>) -> Result<Vec<LocalizedContent>> {
        LocalizedContent::deserialize(property.get(self))
    }

    /// The value of `property` in `language`, falling back to the registry's
    /// default language.
    fn localized(&self, property: &Property<Self>, language: Language) -> Result<String> {
        self.localized_or(property, language, Language::default_language())
    }

    /// The value of `property` in `language`, falling back to `fallback`.
    ///
    /// # Arguments
    /// * `property` - The localized property to read
    /// * `language` - The language to read it in
    /// * `fallback` - The language used when `language` has no value
    ///
    /// # Returns
    /// The text, or an empty string when neither language has a value.
    fn localized_or(
        &self,
        property: &Property<Self>,
        language: Language,
        fallback: Language,
    ) -> Result<String> {
        let contents = self.localized_contents(property)?;
        Ok(LocalizedContent::localize(&contents, language.code(), fallback.code()).to_string())
    }
}
