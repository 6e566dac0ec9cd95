//! Required-field checks that populate a [`ModelStateDictionary`].
//!
//! This plays the part of form binding: it flags a property whose raw value is
//! blank. For a localized property that is the state before its per-language
//! values are applied.

use crate::model_state::ModelStateDictionary;
use crate::property::Property;

/// Field path for `property` under `prefix` (`"Product.Name"`, or `"Name"`
/// when `prefix` is empty).
pub fn field_key<T>(prefix: &str, property: &Property<T>) -> String {
    if prefix.is_empty() {
        property.name().to_string()
    } else {
        format!("{}.{}", prefix, property.name())
    }
}

/// Add a "field is required" error when `property` on `item` is blank.
///
/// Returns `true` if an error was added.
pub fn require_property<T>(
    errors: &mut ModelStateDictionary,
    prefix: &str,
    property: &Property<T>,
    item: &T,
) -> bool {
    if !property.get(item).trim().is_empty() {
        return false;
    }

    errors.add_model_error(
        field_key(prefix, property),
        format!("The {} field is required.", property.name()),
    );
    true
}
