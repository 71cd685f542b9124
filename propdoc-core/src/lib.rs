//! Semi-structured property documents with strongly-typed trait views.
//!
//! This crate is the core of the propdoc project and provides:
//!
//! - **Values** ([`value`]) - The tagged union stored under each key
//! - **Property maps** ([`properties`]) - The owned key/value bag behind every document
//! - **Document traits** ([`document`]) - The put/get/children contract shared by all record kinds
//! - **Child traversal** ([`children`]) - Lazy materialization of nested records
//! - **Trait views** ([`traits`]) - Typed, read-only capabilities such as `HasModel`
//! - **Property names** ([`property`]) - The well-known keys read by the trait views
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```
//! use propdoc_core::{
//!     document::{Document, DocumentExt},
//!     properties::Properties,
//!     traits::HasPrice,
//! };
//!
//! pub struct Invoice(Properties);
//!
//! impl Document for Invoice {
//!     fn from_properties(properties: Properties) -> Self { Self(properties) }
//!     fn properties(&self) -> &Properties { &self.0 }
//!     fn properties_mut(&mut self) -> &mut Properties { &mut self.0 }
//!     fn kind_name() -> &'static str { "Invoice" }
//! }
//!
//! impl HasPrice for Invoice {}
//!
//! let mut invoice = Invoice::from_properties(Properties::new());
//! invoice.put("price", 250);
//! assert_eq!(invoice.price().unwrap(), Some(250));
//! ```

pub mod children;
pub mod document;
pub mod error;
pub mod properties;
pub mod property;
pub mod traits;
pub mod value;
