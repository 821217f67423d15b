// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Copying and merging serializable values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors from [`deep_copy`] and [`merge`].
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("value did not survive a JSON round trip: {0}")]
    RoundTrip(#[from] serde_json::Error),
    #[error("expected an object, got {0}")]
    NotAnObject(&'static str),
}

/// Copy a value by round-tripping it through JSON.
///
/// The copy is lossy in the same ways JSON is: non-finite floats become
/// `null` (so `Some(f64::NAN)` comes back as `None`), and fields marked
/// `#[serde(skip)]` come back as their default. Values JSON cannot hold at
/// all, such as maps with non-string keys, fail with
/// [`ValueError::RoundTrip`].
pub fn deep_copy<T>(value: &T) -> Result<T, ValueError>
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}

/// Shallow-merge objects into a new object.
///
/// Keys of later sources override earlier ones but keep the position where
/// the key first appeared. Nested objects are replaced, never merged. `null` sources are skipped; a `null` target counts as an
/// empty object. Any other non-object input is rejected.
pub fn merge(target: &Value, sources: &[&Value]) -> Result<Value, ValueError> {
    let mut merged = as_object(target)?.cloned().unwrap_or_default();
    for source in sources {
        if let Some(map) = as_object(source)? {
            merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
    Ok(Value::Object(merged))
}

/// Shallow-merge maps; later maps win.
pub fn merge_maps<'a>(
    target: &Map<String, Value>,
    sources: impl IntoIterator<Item = &'a Map<String, Value>>,
) -> Map<String, Value> {
    let mut merged = target.clone();
    for source in sources {
        merged.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

fn as_object(value: &Value) -> Result<Option<&Map<String, Value>>, ValueError> {
    match value {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        Value::Bool(_) => Err(ValueError::NotAnObject("boolean")),
        Value::Number(_) => Err(ValueError::NotAnObject("number")),
        Value::String(_) => Err(ValueError::NotAnObject("string")),
        Value::Array(_) => Err(ValueError::NotAnObject("array")),
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
