//! Ordered map type for nosj documents.
//!
//! This module provides [`NosjMap`], a wrapper around [`IndexMap`] that
//! preserves the order in which keys appear in the source document. nosj
//! documents are rendered in declaration order, never key-sort order, so a
//! plain `HashMap` would scramble the output.
//!
//! Duplicate keys are a format error in nosj, not an overwrite. The parser
//! enforces this through [`NosjMap::insert_unique`]; plain
//! [`NosjMap::insert`] keeps last-write-wins semantics for programmatic
//! construction (the [`nosj!`](crate::nosj) macro uses it).
//!
//! ## Examples
//!
//! ```rust
//! use nosj::{NosjMap, Value};
//!
//! let mut map = NosjMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! // Iteration maintains insertion order
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use crate::{Error, Result, Value};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An ordered map of nosj keys to values.
///
/// Iteration yields entries in insertion order, which for a parsed document
/// is the left-to-right order of appearance in the source text. The parsed
/// tree exclusively owns its children; nested maps are values like any
/// other, so the structure is always a tree.
///
/// # Examples
///
/// ```rust
/// use nosj::{NosjMap, Value};
///
/// let mut map = NosjMap::new();
/// map.insert_unique("first".to_string(), Value::from(1)).unwrap();
/// assert!(map.insert_unique("first".to_string(), Value::from(2)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NosjMap(IndexMap<String, Value>);

impl NosjMap {
    /// Creates an empty `NosjMap`.
    #[must_use]
    pub fn new() -> Self {
        NosjMap(IndexMap::new())
    }

    /// Creates an empty `NosjMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NosjMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, appending at the end of iteration order.
    ///
    /// If the map already contained this key, the old value is replaced and
    /// returned and the key keeps its original position. The parser never
    /// calls this; it uses [`NosjMap::insert_unique`].
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Inserts a key-value pair, rejecting duplicates.
    ///
    /// Duplicate keys within one map are a format error regardless of
    /// whether the values are equal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the key is already present.
    pub fn insert_unique(&mut self, key: String, value: Value) -> Result<()> {
        if self.0.contains_key(&key) {
            return Err(Error::format(format!("duplicate key `{key}`")));
        }
        self.0.insert(key, value);
        Ok(())
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for NosjMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NosjMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for NosjMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
