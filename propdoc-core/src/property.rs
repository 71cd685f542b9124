//! Well-known property names.

use std::fmt;

/// The property keys read by the built-in trait views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// `parts`: the nested records of a composite document.
    Parts,
    /// `type`: what kind of thing a record describes.
    Type,
    /// `price`: an integral price.
    Price,
    /// `model`: the model name.
    Model,
}

impl Property {
    /// Every well-known property.
    pub const ALL: [Property; 4] = [Property::Parts, Property::Type, Property::Price, Property::Model];

    /// Returns the key this property is stored under.
    pub const fn as_str(self) -> &'static str {
        match self {
            Property::Parts => "parts",
            Property::Type => "type",
            Property::Price => "price",
            Property::Model => "model",
        }
    }
}

impl AsRef<str> for Property {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Property> for String {
    fn from(property: Property) -> Self {
        property.as_str().to_owned()
    }
}
