//! Sample record kinds: a [`Car`] made of [`Part`]s.
//!
//! Both kinds share the same storage shape and differ only in the trait views they
//! implement.

mod car;
mod part;

pub use car::Car;
pub use part::Part;
