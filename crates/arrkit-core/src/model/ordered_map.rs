//! Insertion-ordered key/value container.
//!
//! Entries live in a `Vec`, so iteration order is insertion order and
//! lookups are linear. Keys are unique: inserting an existing key replaces
//! its value in place without moving the entry.

use crate::errors::Result;
use crate::model::key::Key;
use crate::model::value::Value;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedMap {
    entries: Vec<(Key, Value)>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Build a list-like map: values keyed `0, 1, 2, ...`.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v.into()))
            .collect();
        Self { entries }
    }

    /// Parse a JSON document whose root is an object or an array.
    ///
    /// Object members keep document order. A scalar root becomes a
    /// single-entry list.
    ///
    /// # Errors
    ///
    /// Returns `ArrError::Serialization` if the text is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(match Value::from(json) {
            Value::Map(m) => m,
            other => Self::from_values([other]),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Insert or replace. Returns the previous value for an existing key,
    /// which keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Append under the next integer key (one past the largest integer key,
    /// or `0` when there is none).
    pub fn push(&mut self, value: impl Into<Value>) {
        let next = self
            .entries
            .iter()
            .filter_map(|(k, _)| k.as_int())
            .max()
            .map_or(0, |max| max + 1);
        self.entries.push((Key::Int(next), value.into()));
    }

    /// Remove an entry, keeping the relative order of the rest.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(split_entry)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries sorted by key (see [`Key`]'s ordering).
    pub fn sorted_by_key(&self) -> Vec<(&Key, &Value)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// True when the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| k.as_int() == Some(i as i64))
    }

    pub fn to_json(&self) -> serde_json::Value {
        if self.is_list() && !self.is_empty() {
            serde_json::Value::Array(self.values().map(Value::to_json).collect())
        } else {
            serde_json::Value::Object(
                self.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            )
        }
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for OrderedMap {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (Key, Value)>,
        fn(&'a (Key, Value)) -> (&'a Key, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(split_entry as fn(&'a (Key, Value)) -> (&'a Key, &'a Value))
    }
}

fn split_entry(entry: &(Key, Value)) -> (&Key, &Value) {
    (&entry.0, &entry.1)
}

impl Serialize for OrderedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Build an [`OrderedMap`] from `key => value` pairs.
///
/// ```
/// use arrkit_core::omap;
///
/// let m = omap! { "a" => 1, "b" => omap! { 0 => true } };
/// assert_eq!(m.len(), 2);
/// ```
#[macro_export]
macro_rules! omap {
    () => {
        $crate::model::OrderedMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::model::OrderedMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}
