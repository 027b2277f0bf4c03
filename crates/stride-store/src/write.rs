// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;

use crate::StoreError;

/// The stored contents of a document.
pub type Fields = serde_json::Map<String, Value>;

/// A single field write. Sentinels are resolved by the store at write time.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteValue {
    Value(Value),
    /// Adds the given amount to the current numeric value. A missing field counts as zero.
    Increment(i64),
    /// Resolves to the store's clock (microseconds since the epoch) when the write is applied.
    ServerTimestamp,
    /// Removes the field.
    Delete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Merge the written fields into an existing document instead of replacing it.
    pub merge: bool,
}

impl SetOptions {
    pub fn merge() -> Self {
        Self { merge: true }
    }

    pub fn overwrite() -> Self {
        Self { merge: false }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteFields(BTreeMap<String, WriteValue>);

impl WriteFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a serializable struct into plain value writes. The value must serialize into a
    /// JSON object.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, StoreError> {
        let Value::Object(map) = serde_json::to_value(value)? else {
            return Err(StoreError::Serialization(serde_json::Error::custom(
                "Documents must serialize into a map.",
            )));
        };
        Ok(Self(
            map.into_iter()
                .map(|(key, value)| (key, WriteValue::Value(value)))
                .collect(),
        ))
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), WriteValue::Value(value.into()));
        self
    }

    pub fn increment(mut self, key: impl Into<String>, amount: i64) -> Self {
        self.0.insert(key.into(), WriteValue::Increment(amount));
        self
    }

    pub fn server_timestamp(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), WriteValue::ServerTimestamp);
        self
    }

    pub fn delete(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), WriteValue::Delete);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: WriteValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&WriteValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, WriteValue> {
        self.0.iter()
    }

    /// Applies all writes to `target`, resolving `ServerTimestamp` to `timestamp`.
    pub fn apply_to(self, target: &mut Fields, timestamp: i64) {
        for (key, write) in self.0 {
            match write {
                WriteValue::Value(value) => {
                    target.insert(key, value);
                }
                WriteValue::Increment(amount) => {
                    let current = target.get(&key).and_then(Value::as_i64).unwrap_or(0);
                    target.insert(key, Value::from(current + amount));
                }
                WriteValue::ServerTimestamp => {
                    target.insert(key, Value::from(timestamp));
                }
                WriteValue::Delete => {
                    target.remove(&key);
                }
            }
        }
    }

    /// The plain values of this write, as they would look on a freshly created document.
    pub fn preview(&self, timestamp: i64) -> Fields {
        let mut fields = Fields::new();
        self.clone().apply_to(&mut fields, timestamp);
        fields
    }
}

impl FromIterator<(String, WriteValue)> for WriteFields {
    fn from_iter<I: IntoIterator<Item = (String, WriteValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
