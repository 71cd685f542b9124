//! Typed, read-only trait views over documents.
//!
//! Each trait is bound to one fixed [`Property`] and is implemented by a record kind
//! simply by declaring it; the default method does all the work through
//! [`DocumentExt`]. Views never mutate the document and never substitute defaults:
//! an absent key reads as `Ok(None)` and a value of the wrong shape reads as
//! [`DocumentError::TypeMismatch`](crate::error::DocumentError::TypeMismatch).
//!
//! # Example
//!
//! ```
//! use propdoc_core::{
//!     document::Document,
//!     properties::Properties,
//!     traits::{HasModel, HasPrice},
//! };
//!
//! struct Engine(Properties);
//!
//! impl Document for Engine {
//!     fn from_properties(properties: Properties) -> Self { Self(properties) }
//!     fn properties(&self) -> &Properties { &self.0 }
//!     fn properties_mut(&mut self) -> &mut Properties { &mut self.0 }
//!     fn kind_name() -> &'static str { "Engine" }
//! }
//!
//! impl HasModel for Engine {}
//! impl HasPrice for Engine {}
//!
//! let engine = Engine::from_properties(Properties::builder().with("model", "V8").build());
//! assert_eq!(engine.model().unwrap().as_deref(), Some("V8"));
//! assert_eq!(engine.price().unwrap(), None);
//! ```

use crate::{
    children::Children,
    document::{Document, DocumentExt},
    error::DocumentResult,
    properties::Properties,
    property::Property,
};

/// A document with a textual `type`.
pub trait HasType: Document {
    /// Reads the `type` property.
    fn type_name(&self) -> DocumentResult<Option<String>> {
        self.read(Property::Type)
    }
}

/// A document with a textual `model`.
pub trait HasModel: Document {
    /// Reads the `model` property.
    fn model(&self) -> DocumentResult<Option<String>> {
        self.read(Property::Model)
    }
}

/// A document with an integral `price`.
pub trait HasPrice: Document {
    /// Reads the `price` property.
    fn price(&self) -> DocumentResult<Option<i64>> {
        self.read(Property::Price)
    }
}

/// A document whose `parts` property holds nested records.
///
/// The record kind chooses what each part is materialized as through [`HasParts::Part`].
pub trait HasParts: Document {
    /// The document type each nested record is wrapped in.
    type Part: Document;

    /// Lazily walks the `parts` property, building a fresh [`HasParts::Part`] per record.
    fn parts(&self) -> DocumentResult<Children<'_, Self::Part>> {
        self.children(
            Property::Parts,
            <Self::Part as Document>::from_properties as fn(Properties) -> Self::Part,
        )
    }
}
