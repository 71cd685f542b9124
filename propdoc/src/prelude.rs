//! Convenient re-exports of commonly used types from propdoc.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use propdoc::prelude::*;
//! ```
//!
//! This provides access to:
//! - Document traits and the `Document` derive
//! - Values and property maps
//! - Trait views and property names
//! - Error types

pub use propdoc_core::{
    children::Children,
    document::{Document, DocumentExt},
    error::{DocumentError, DocumentResult},
    properties::{Properties, PropertiesBuilder},
    property::Property,
    traits::{HasModel, HasParts, HasPrice, HasType},
    value::{FromValue, Value, ValueKind},
};
pub use propdoc_macros::Document;
