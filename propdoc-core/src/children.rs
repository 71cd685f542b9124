//! Lazy traversal of nested records as child documents.
//!
//! [`Children`] is returned by [`DocumentExt::children`](crate::document::DocumentExt::children).
//! It borrows the parent's stored sequence and builds one child per step, so the parent
//! cannot be mutated while a traversal is in flight and no child outlives a single walk
//! unless the caller keeps it.

use std::{fmt, iter::FusedIterator, marker::PhantomData, slice};

use crate::properties::Properties;

/// An iterator that constructs a child document from each nested record on demand.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the borrow on the parent document
/// * `T` - The child document type
/// * `F` - The constructor turning a nested map into a `T`
pub struct Children<'a, T, F = fn(Properties) -> T> {
    records: slice::Iter<'a, Properties>,
    constructor: F,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T, F> Children<'a, T, F>
where
    F: Fn(Properties) -> T,
{
    pub(crate) fn new(records: &'a [Properties], constructor: F) -> Self {
        Self {
            records: records.iter(),
            constructor,
            _marker: PhantomData,
        }
    }

    /// Returns the nested records not yet visited, without constructing children.
    pub fn as_records(&self) -> &'a [Properties] {
        self.records.as_slice()
    }
}

impl<T, F> Iterator for Children<'_, T, F>
where
    F: Fn(Properties) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.records
            .next()
            .map(|record| (self.constructor)(record.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        // skipped records are never materialized
        self.records
            .nth(n)
            .map(|record| (self.constructor)(record.clone()))
    }
}

impl<T, F> DoubleEndedIterator for Children<'_, T, F>
where
    F: Fn(Properties) -> T,
{
    fn next_back(&mut self) -> Option<T> {
        self.records
            .next_back()
            .map(|record| (self.constructor)(record.clone()))
    }
}

impl<T, F> ExactSizeIterator for Children<'_, T, F> where F: Fn(Properties) -> T {}

impl<T, F> FusedIterator for Children<'_, T, F> where F: Fn(Properties) -> T {}

impl<T, F> fmt::Debug for Children<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("remaining", &self.records.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::value::Value;

    fn records() -> Vec<Properties> {
        (0i64..4)
            .map(|index| Properties::builder().with("index", index).build())
            .collect()
    }

    #[test]
    fn nth_skips_without_constructing() {
        let records = records();
        let built = Cell::new(0);
        let mut children = Children::new(&records, |props: Properties| {
            built.set(built.get() + 1);
            props
        });

        let third = children.nth(2).unwrap();

        assert_eq!(third.get("index").and_then(|v| v.as_i64()), Some(2));
        assert_eq!(built.get(), 1);
        assert_eq!(children.len(), 1);
        assert_eq!(children.as_records().len(), 1);
    }

    #[test]
    fn walks_from_both_ends() {
        let records = records();
        let mut children = Children::new(&records, |props: Properties| props.get("index").cloned());

        assert_eq!(children.next_back(), Some(Some(Value::Int(3))));
        assert_eq!(children.next(), Some(Some(Value::Int(0))));
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn stays_exhausted() {
        let mut children = Children::new(&[], |props: Properties| props);

        assert!(children.next().is_none());
        assert!(children.next().is_none());
        assert_eq!(format!("{children:?}"), "Children { remaining: 0 }");
    }
}
