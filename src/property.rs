//! Typed property selectors.
//!
//! A `Property<T>` pairs a string field of `T` with its name. The name is what
//! validation errors are keyed by; the accessors are what content is written
//! through. Build one with [`localized_property!`](crate::localized_property).

use std::fmt;

/// A named `String` field of `T`.
pub struct Property<T> {
    name: &'static str,
    get: fn(&T) -> &String,
    get_mut: fn(&mut T) -> &mut String,
}

impl<T> Property<T> {
    /// Prefer the `localized_property!` macro, which keeps `name` in sync with
    /// the field.
    pub const fn new(
        name: &'static str,
        get: fn(&T) -> &String,
        get_mut: fn(&mut T) -> &mut String,
    ) -> Self {
        Self { name, get, get_mut }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'a>(&self, item: &'a T) -> &'a String {
        (self.get)(item)
    }

    pub fn get_mut<'a>(&self, item: &'a mut T) -> &'a mut String {
        (self.get_mut)(item)
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property").field("name", &self.name).finish()
    }
}

/// Build a [`Property`] for a `String` field.
///
/// The error-store name defaults to the field identifier as written. Form
/// field paths are usually PascalCase, so pass the name explicitly to match
/// them. Both forms resolve to a `&'static str` at compile time.
///
/// ```rust
/// use localized_content::localized_property;
///
/// struct Product { name: String }
///
/// let name = localized_property!(Product, name);
/// assert_eq!(name.name(), "name");
///
/// let label = localized_property!(Product, name, "Name");
/// assert_eq!(label.name(), "Name");
/// ```
#[macro_export]
macro_rules! localized_property {
    ($ty:ty, $field:ident) => {
        $crate::localized_property!($ty, $field, stringify!($field))
    };
    ($ty:ty, $field:ident, $name:expr) => {
        $crate::property::Property::<$ty>::new(
            $name,
            |item: &$ty| &item.$field,
            |item: &mut $ty| &mut item.$field,
        )
    };
}
