//! JSON value types.
//!
//! This module defines the [`Value`] enum produced by the parser and the two
//! composite containers, [`Object`] and [`Array`]. `Display` on each of them
//! writes compact JSON text.
//!
//! String payloads and object keys are kept in their source form: escape
//! sequences such as `\"` or `\u00e9` are stored as written, so printing a
//! parsed tree gives back text the parser accepts. Use [`Value::string`] or
//! [`escape`](crate::escape) to build them from plain text and
//! [`unescape`](crate::unescape) to read them back.

use alloc::{
    collections::{BTreeMap, btree_map},
    string::String,
    vec::Vec,
};
use core::fmt::{self, Write};

use crate::escape::escape_into;

/// A parsed JSON value.
///
/// # Examples
///
/// ```
/// use basejson::{Object, Value};
///
/// let mut object = Object::new();
/// object.put("key", Value::string("value"));
/// object.put("n", 3);
/// assert_eq!(Value::Object(object).to_string(), r#"{"key":"value","n":3}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Bool(bool),
    /// An integer literal, with or without the `L` suffix.
    Int(i64),
    /// A literal with a fraction or an exponent.
    Float(f64),
    /// The raw text between the quotes of a string literal.
    String(String),
    /// `{ ... }`
    Object(Object),
    /// `[ ... ]`
    Array(Array),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Wraps `v` as-is. It must already be in escaped form; see [`Value::string`].
impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl Value {
    /// Builds a string value from unescaped text.
    ///
    /// Quotes, backslashes and control characters are escaped so that the
    /// value prints as a valid JSON string literal.
    ///
    /// ```
    /// use basejson::Value;
    ///
    /// let v = Value::string("say \"hi\"\n");
    /// assert_eq!(v.as_str(), Some(r#"say \"hi\"\n"#));
    /// ```
    #[must_use]
    pub fn string(text: &str) -> Self {
        let mut raw = String::with_capacity(text.len());
        escape_into(text, &mut raw);
        Self::String(raw)
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use basejson::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Bool(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Int`].
    ///
    /// [`Int`]: Value::Int
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(..))
    }

    /// Returns `true` if the value is [`Float`].
    ///
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` for both [`Int`] and [`Float`].
    ///
    /// [`Int`]: Value::Int
    /// [`Float`]: Value::Float
    ///
    /// # Examples
    ///
    /// ```
    /// use basejson::Value;
    ///
    /// assert!(Value::Int(42).is_number());
    /// assert!(Value::Float(0.5).is_number());
    /// assert!(!Value::Null.is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(..) | Self::Float(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// The boolean, if this is [`Bool`](Value::Bool).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// The integer, if this is [`Int`](Value::Int).
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the number as `f64`. Integers are converted, which may round.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(n) => Some(n as f64),
            Self::Float(n) => Some(n),
            _ => None,
        }
    }

    /// The raw (still escaped) string content.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The object, if this is [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The array, if this is [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    ///
    /// ```
    /// let v = basejson::parse(r#"{"a": {"b": [10, 20]}}"#).unwrap();
    /// let b = v.get("a").and_then(|a| a.get("b"));
    /// assert_eq!(b.and_then(|b| b.get_index(1)), Some(&basejson::Value::Int(20)));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Looks up `index` if this is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// Name of the variant, as used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
        }
    }
}

/// A JSON object: string keys mapped to values.
///
/// Keys are unique and a repeated [`put`](Object::put) replaces the earlier
/// value. Iteration runs in key order. Like string values, keys are held in
/// escaped form and printed as they are; build them with
/// [`escape`](crate::escape) when they come from plain text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object(BTreeMap<String, Value>);

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Whether the object has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an entry exists under the raw `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The value under the raw `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value under `key` if it is an object.
    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key).and_then(Value::as_object)
    }

    /// The value under `key` if it is an array.
    #[must_use]
    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.get(key).and_then(Value::as_array)
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// `key` is stored as given and must already be escaped.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts every pair from `entries`; later pairs win.
    pub fn put_all<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    /// Removes `key`, returning its value if it was present.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Removes every key in `keys`; absent keys are ignored.
    pub fn delete_all<K: AsRef<str>>(&mut self, keys: impl IntoIterator<Item = K>) {
        for key in keys {
            self.0.remove(key.as_ref());
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        object.put_all(iter);
        object
    }
}

/// A JSON array in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array(Vec<Value>);

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Whether the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds `value` at the end.
    pub fn append(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// The element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// The element at `index` if it is an object.
    #[must_use]
    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.get(index).and_then(Value::as_object)
    }

    /// The element at `index` if it is an array.
    #[must_use]
    pub fn get_array(&self, index: usize) -> Option<&Array> {
        self.get(index).and_then(Value::as_array)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Value>> for Array {
    fn from(v: Vec<Value>) -> Self {
        Self(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{n}"),
            // Debug keeps a `.0` or an exponent, so the text re-parses as a float.
            Value::Float(n) if n.is_finite() => write!(f, "{n:?}"),
            Value::Float(_) => f.write_str("null"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Object(object) => object.fmt(f),
            Value::Array(array) => array.fmt(f),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "\"{key}\":{value}")?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{value}")?;
        }
        f.write_char(']')
    }
}
