use propdoc_core::{
    properties::Properties,
    traits::{HasModel, HasParts, HasPrice},
};
use propdoc_macros::Document;

use super::Part;

/// A car: has a model, a price and a list of [`Part`]s.
#[derive(Debug, Clone, PartialEq, Document)]
pub struct Car {
    properties: Properties,
}

impl HasModel for Car {}

impl HasPrice for Car {}

impl HasParts for Car {
    type Part = Part;
}
