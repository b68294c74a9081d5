//! Dynamic value representation for nosj data.
//!
//! This module provides the [`Value`] enum which represents any valid nosj
//! value. The format has exactly four value grammars but only three runtime
//! shapes: simple and complex strings both decode to [`Value::Text`].
//!
//! ## Core Types
//!
//! - [`Value`]: an enum representing any nosj value (map, integer, text)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use nosj::{nosj, Value};
//!
//! // From primitives
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the nosj! macro
//! let obj = nosj!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use nosj::from_str;
//!
//! let map = from_str("<count:i3,label:boxess>").unwrap();
//! assert_eq!(map.get("count").and_then(|v| v.as_i64()), Some(3));
//! assert_eq!(map.get("label").and_then(|v| v.as_str()), Some("boxes"));
//! ```

use crate::NosjMap;
use serde::{Serialize, Serializer};

/// A dynamically-typed representation of any valid nosj value.
///
/// This is a closed set: the format defines maps, integers, and two string
/// grammars that collapse into [`Value::Text`] once decoded. Parsed trees
/// are built in one pass and never mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use nosj::{NosjMap, Value};
///
/// let num = Value::Integer(42);
/// let text = Value::Text("hello".to_string());
/// let map = Value::Map(NosjMap::new());
///
/// assert!(num.is_integer());
/// assert!(text.is_text());
/// assert!(map.is_map());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A nested map, recursively the same structure as the document root.
    Map(NosjMap),
    /// A parsed decimal integer, optionally negative.
    Integer(i64),
    /// The decoded text of a simple or complex string.
    Text(String),
}

impl Value {
    /// Returns `true` if this value is a map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if this value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if this value is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns the inner map if this value is a map.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&NosjMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the integer if this value is an integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nosj::Value;
    ///
    /// assert_eq!(Value::Integer(-7).as_i64(), Some(-7));
    /// assert_eq!(Value::Text("hi".to_string()).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this value is text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<NosjMap> for Value {
    fn from(map: NosjMap) -> Self {
        Value::Map(map)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Map(map) => map.serialize(serializer),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}
