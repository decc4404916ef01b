//! Property tree - the ordered intermediate form between extraction and serialization

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// An ordered mapping of property names to values
///
/// Keys keep their insertion order in the serialized document. Inserting a key
/// that already exists replaces the value in place, so every key appears once.
/// Entity relationships are flattened to strings before they get here, so a
/// tree can never contain a cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyTree(Map<String, Value>);

impl PropertyTree {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a property
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a property only when the host provided a value for it
    pub fn insert_opt<V: Into<Value>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Insert a float, skipping NaN and infinities which have no JSON form
    pub fn insert_float(&mut self, key: impl Into<String>, value: Option<f64>) -> &mut Self {
        if let Some(number) = value.and_then(Number::from_f64) {
            self.insert(key, Value::Number(number));
        }
        self
    }

    /// Insert a nested tree
    pub fn insert_tree(&mut self, key: impl Into<String>, tree: PropertyTree) -> &mut Self {
        self.insert(key, Value::Object(tree.0))
    }

    /// Insert a sequence of nested trees
    pub fn insert_trees(
        &mut self,
        key: impl Into<String>,
        trees: impl IntoIterator<Item = PropertyTree>,
    ) -> &mut Self {
        let items = trees.into_iter().map(Value::from).collect::<Vec<_>>();
        self.insert(key, Value::Array(items))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Property names in emitted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<PropertyTree> for Value {
    fn from(tree: PropertyTree) -> Self {
        Value::Object(tree.0)
    }
}
