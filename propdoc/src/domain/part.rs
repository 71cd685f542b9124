use propdoc_core::{
    properties::Properties,
    traits::{HasModel, HasPrice, HasType},
};
use propdoc_macros::Document;

/// A car part: has a type, a model and a price.
#[derive(Debug, Clone, PartialEq, Document)]
pub struct Part {
    properties: Properties,
}

impl HasType for Part {}

impl HasModel for Part {}

impl HasPrice for Part {}
