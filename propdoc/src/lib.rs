//! Main propdoc crate providing record kinds over semi-structured property documents.
//!
//! This crate is the primary entry point for users of the propdoc framework.
//! It re-exports the core types from `propdoc-core`, the `#[derive(Document)]` macro,
//! and ships the sample record kinds in [`domain`].
//!
//! # Features
//!
//! - **Schema-free storage** - Every record is a mutable bag of string-keyed [`value::Value`]s
//! - **Typed trait views** - Read known properties through traits such as `HasModel` and `HasPrice`
//! - **Lazy children** - Nested records are materialized as child documents only when walked
//!
//! # Quick Start
//!
//! ```
//! use propdoc::{prelude::*, domain::Car};
//!
//! let wheel = Properties::builder()
//!     .with(Property::Type, "wheel")
//!     .with(Property::Model, "15C")
//!     .with(Property::Price, 100)
//!     .build();
//!
//! let car = Car::from_properties(
//!     Properties::builder()
//!         .with(Property::Model, "300SL")
//!         .with(Property::Price, 10000)
//!         .with(Property::Parts, vec![wheel])
//!         .build(),
//! );
//!
//! assert_eq!(car.model().unwrap().as_deref(), Some("300SL"));
//! assert_eq!(car.price().unwrap(), Some(10000));
//!
//! for part in car.parts().unwrap() {
//!     assert_eq!(part.type_name().unwrap().as_deref(), Some("wheel"));
//! }
//! ```
//!
//! # Defining Record Kinds
//!
//! A record kind is a struct with a single `Properties` field that opts into trait views:
//!
//! ```
//! use propdoc::prelude::*;
//!
//! #[derive(Debug, Clone, Document)]
//! pub struct Tyre {
//!     properties: Properties,
//! }
//!
//! impl HasModel for Tyre {}
//! impl HasPrice for Tyre {}
//!
//! let tyre = Tyre::from_json(serde_json::json!({ "model": "P Zero", "price": 220 })).unwrap();
//! assert_eq!(tyre.to_string(), "Tyre[[model : P Zero][price : 220]]");
//! ```

#[allow(unused_extern_crates)]
extern crate self as propdoc;

pub mod domain;
pub mod prelude;

pub use propdoc_core::{children, document, error, properties, property, traits, value};
pub use propdoc_macros::Document;

#[doc(hidden)]
pub use propdoc_core as __core;
