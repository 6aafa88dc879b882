//! Record construction on an owned tree of ordered JSON objects.

use crate::path::PathSpec;
use serde_json::{Map, Value};
use std::fmt;

/// Name of the field every record is seeded with.
pub const ID_FIELD: &str = "id";

/// One generated JSON object, fields kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record holding only `"id": index`.
    pub fn new(index: u64) -> Self {
        let mut fields = Map::new();
        fields.insert(ID_FIELD.to_string(), Value::from(index));
        Self { fields }
    }

    /// Insert or replace a top-level field.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Set `value` at `path`, creating intermediate objects as needed.
    ///
    /// An intermediate field that exists but is not an object is replaced by
    /// an empty object.
    pub fn set_path(&mut self, path: &PathSpec, value: Value) {
        set_in(&mut self.fields, path.segments(), value);
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Compact JSON encoding; non-ASCII characters are written literally.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

fn set_in(map: &mut Map<String, Value>, segments: &[String], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert(last.clone(), value);
        }
        [head, rest @ ..] => {
            let child = map
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child) = child {
                set_in(child, rest, value);
            }
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}
