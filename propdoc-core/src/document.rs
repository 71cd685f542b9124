//! Core traits for documents backed by a property map.
//!
//! A document is any type that owns exactly one [`Properties`] map. [`Document`] is the
//! minimal storage contract a record kind implements (usually through
//! `#[derive(Document)]`), and [`DocumentExt`] layers the uniform put/get/children
//! operations on top of it for every document type.

use std::fmt;

use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use crate::{
    children::Children,
    error::{DocumentError, DocumentResult},
    properties::Properties,
    value::{FromValue, Value, ValueKind},
};

/// Core trait that every record kind must implement.
///
/// This trait only grants access to the backing map. A document holds no other state,
/// so two record kinds with the same storage differ only in which trait views they
/// implement.
///
/// # Deriving with `#[derive]`
///
/// For a struct with a single field holding its [`Properties`], the `propdoc` crate
/// provides `#[derive(Document)]`, which also generates `From<Properties>` and a
/// `Display` implementation rendering every entry.
///
/// # Example
///
/// ```
/// use propdoc_core::{document::{Document, DocumentExt}, properties::Properties};
///
/// pub struct Engine {
///     properties: Properties,
/// }
///
/// impl Document for Engine {
///     fn from_properties(properties: Properties) -> Self {
///         Self { properties }
///     }
///
///     fn properties(&self) -> &Properties {
///         &self.properties
///     }
///
///     fn properties_mut(&mut self) -> &mut Properties {
///         &mut self.properties
///     }
///
///     fn kind_name() -> &'static str {
///         "Engine"
///     }
/// }
///
/// let mut engine = Engine::from_properties(Properties::new());
/// engine.put("cylinders", 8);
/// assert_eq!(engine.get("cylinders").and_then(|v| v.as_i64()), Some(8));
/// ```
pub trait Document: Sized {
    /// Wraps a fully-built property map. No validation happens here; shape problems
    /// surface when a specific property is read.
    fn from_properties(properties: Properties) -> Self;

    /// Returns the backing property map.
    fn properties(&self) -> &Properties;

    /// Returns the backing property map for in-place mutation.
    fn properties_mut(&mut self) -> &mut Properties;

    /// Returns the name used when rendering the document, e.g. `"Car"`.
    fn kind_name() -> &'static str;
}

/// Extension trait providing the uniform property operations for documents.
///
/// This trait is automatically implemented for all types that implement [`Document`].
pub trait DocumentExt: Document {
    /// Inserts or overwrites the value for `key`. Last write wins.
    fn put(&mut self, key: impl Into<String>, value: impl Into<Value>);

    /// Returns the value stored for `key`, or `None` if it was never set.
    ///
    /// An explicitly stored [`Value::Null`] reads the same as an absent key.
    fn get(&self, key: impl AsRef<str>) -> Option<&Value>;

    /// Reads `key` and interprets it as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::TypeMismatch`] if the stored value does not have the shape
    /// `T` is read from. An absent key is `Ok(None)`.
    fn read<T: FromValue>(&self, key: impl AsRef<str>) -> DocumentResult<Option<T>>;

    /// Views the sequence of records stored at `key` as child documents.
    ///
    /// Each nested map is handed to `constructor` only when the returned iterator reaches
    /// it. Nothing is cached: every call walks the current contents of `key`, and every
    /// child is a fresh value built from a copy of its nested map. An absent key yields
    /// an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::TypeMismatch`] if `key` holds anything other than a
    /// sequence of records.
    fn children<T, F>(&self, key: impl AsRef<str>, constructor: F) -> DocumentResult<Children<'_, T, F>>
    where
        F: Fn(Properties) -> T;

    /// Builds a document from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotARecord`] if `json` is not an object.
    fn from_json(json: JsonValue) -> DocumentResult<Self>;
}

impl<D: Document> DocumentExt for D {
    fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        trace!(document = D::kind_name(), key = %key, "put property");

        self.properties_mut().insert(key, value);
    }

    fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.properties()
            .get(key.as_ref())
            .filter(|value| !value.is_null())
    }

    fn read<T: FromValue>(&self, key: impl AsRef<str>) -> DocumentResult<Option<T>> {
        let key = key.as_ref();

        match self.get(key) {
            None => Ok(None),
            Some(value) => T::from_value(value)
                .map(Some)
                .ok_or_else(|| DocumentError::type_mismatch(key, T::KIND, value.kind())),
        }
    }

    fn children<T, F>(&self, key: impl AsRef<str>, constructor: F) -> DocumentResult<Children<'_, T, F>>
    where
        F: Fn(Properties) -> T,
    {
        let key = key.as_ref();
        let records: &[Properties] = match self.get(key) {
            None => &[],
            Some(Value::Records(records)) => records,
            Some(other) => {
                return Err(DocumentError::type_mismatch(key, ValueKind::Records, other.kind()));
            }
        };

        debug!(document = D::kind_name(), key, count = records.len(), "traversing children");

        Ok(Children::new(records, constructor))
    }

    fn from_json(json: JsonValue) -> DocumentResult<Self> {
        Ok(D::from_properties(Properties::try_from(json)?))
    }
}

/// Renders `document` as `Kind[[key : value][key : value]]`.
///
/// Used by the `Display` implementation that `#[derive(Document)]` generates. Never
/// mutates the document.
pub fn render<D: Document>(document: &D, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}[", D::kind_name())?;
    for (key, value) in document.properties() {
        write!(f, "[{key} : {value}]")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use propdoc_macros::Document;

    use super::*;

    #[derive(Debug, Document)]
    #[document(crate = "crate")]
    struct Sample {
        properties: Properties,
    }

    #[derive(Debug, PartialEq, Document)]
    #[document(name = "Item", crate = "crate")]
    struct Item(Properties);

    fn item(name: &str) -> Properties {
        Properties::builder().with("name", name).build()
    }

    #[test]
    fn get_on_unset_key_is_none() {
        let doc = Sample::from_properties(Properties::new());

        assert_eq!(doc.get("model"), None);
        assert_eq!(doc.read::<String>("model"), Ok(None));
    }

    #[test]
    fn put_overwrites_and_get_is_idempotent() {
        let mut doc = Sample::from_properties(item("first"));
        doc.put("name", "second");

        assert_eq!(doc.get("name"), Some(&Value::from("second")));
        assert_eq!(doc.get("name"), doc.get("name"));
    }

    #[test]
    fn stored_null_reads_as_absent() {
        let mut doc = Sample::from_properties(item("x"));
        doc.put("name", Value::Null);

        assert_eq!(doc.get("name"), None);
        assert_eq!(doc.read::<String>("name"), Ok(None));
        assert_eq!(doc.children("name", Item).map(|c| c.len()), Ok(0));
    }

    #[test]
    fn read_with_wrong_shape_is_type_mismatch() {
        let mut doc = Sample::from_properties(Properties::new());
        doc.put("price", "expensive");

        assert_eq!(
            doc.read::<i64>("price"),
            Err(DocumentError::type_mismatch("price", ValueKind::Int, ValueKind::Text))
        );
        // unrelated keys keep working
        doc.put("model", "15C");
        assert_eq!(doc.read::<String>("model"), Ok(Some("15C".to_owned())));
    }

    #[test]
    fn children_of_absent_key_is_empty() {
        let doc = Sample::from_properties(Properties::new());

        assert_eq!(doc.children("parts", Item).unwrap().count(), 0);
    }

    #[test]
    fn children_preserve_order_and_apply_constructor() {
        let doc = Sample::from_properties(
            Properties::builder()
                .with("parts", vec![item("a"), item("b"), item("c")])
                .build(),
        );

        let children = doc.children("parts", Item).unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(
            children.collect::<Vec<_>>(),
            vec![Item(item("a")), Item(item("b")), Item(item("c"))]
        );
    }

    #[test]
    fn children_are_built_lazily() {
        use std::cell::Cell;

        let built = Cell::new(0);
        let doc = Sample::from_properties(
            Properties::builder()
                .with("parts", vec![item("a"), item("b")])
                .build(),
        );

        let mut children = doc
            .children("parts", |props| {
                built.set(built.get() + 1);
                Item(props)
            })
            .unwrap();
        assert_eq!(built.get(), 0);

        children.next();
        assert_eq!(built.get(), 1);
    }

    #[test]
    fn children_reflect_later_mutation() {
        let mut doc = Sample::from_properties(
            Properties::builder().with("parts", vec![item("a")]).build(),
        );
        assert_eq!(doc.children("parts", Item).unwrap().count(), 1);

        doc.put("parts", vec![item("x"), item("y")]);

        let names = doc
            .children("parts", Item)
            .unwrap()
            .map(|Item(props)| props.get("name").cloned())
            .collect::<Vec<_>>();
        assert_eq!(names, vec![Some(Value::from("x")), Some(Value::from("y"))]);
    }

    #[test]
    fn children_of_scalar_is_type_mismatch() {
        let doc = Sample::from_properties(Properties::builder().with("parts", 4).build());

        let err = doc.children("parts", Item).unwrap_err();
        assert_eq!(
            err,
            DocumentError::type_mismatch("parts", ValueKind::Records, ValueKind::Int)
        );
    }

    #[test]
    fn mutating_a_child_leaves_the_parent_untouched() {
        let doc = Sample::from_properties(
            Properties::builder().with("parts", vec![item("a")]).build(),
        );

        let mut child = doc.children("parts", Item).unwrap().next().unwrap();
        child.put("name", "changed");

        let again = doc.children("parts", Item).unwrap().next().unwrap();
        assert_eq!(again, Item(item("a")));
    }

    #[test]
    fn render_lists_every_entry() {
        let doc = Sample::from_properties(
            Properties::builder()
                .with("model", "15C")
                .with("price", 100)
                .build(),
        );

        assert_eq!(doc.to_string(), "Sample[[model : 15C][price : 100]]");
        assert_eq!(Item(Properties::new()).to_string(), "Item[]");
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Sample::from_json(serde_json::json!("car")).unwrap_err();

        assert!(matches!(err, DocumentError::NotARecord(_)));
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_filter("NaN never equals itself", |f| !f.is_nan()).prop_map(Value::Float),
            ".*".prop_map(Value::Text),
        ]
    }

    proptest! {
        #[test]
        fn put_then_get_round_trips(key in "[a-z]{1,12}", value in scalar()) {
            let mut doc = Sample::from_properties(Properties::new());
            doc.put(key.clone(), value.clone());

            prop_assert_eq!(doc.get(&key), Some(&value));
        }

        #[test]
        fn unwritten_keys_stay_absent(written in "[a-m]{1,8}", probe in "[n-z]{1,8}", value in scalar()) {
            let mut doc = Sample::from_properties(Properties::new());
            doc.put(written, value);

            prop_assert_eq!(doc.get(&probe), None);
        }

        #[test]
        fn children_count_matches_stored_records(names in proptest::collection::vec("[a-z]{0,6}", 0..8)) {
            let records = names.iter().map(|name| item(name)).collect::<Vec<_>>();
            let doc = Sample::from_properties(Properties::builder().with("parts", records.clone()).build());

            let children = doc.children("parts", Item).unwrap().collect::<Vec<_>>();
            prop_assert_eq!(children.len(), names.len());
            prop_assert_eq!(children, records.into_iter().map(Item).collect::<Vec<_>>());
        }
    }
}
