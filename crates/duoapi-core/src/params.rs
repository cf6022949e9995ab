//! Request parameter containers.
//!
//! [`Params`] mirrors a form/query value map (one key, many values) and is what
//! gets canonicalized and signed. [`JsonParams`] carries arbitrary JSON values
//! for the V5 scheme and must be narrowed to strings before it can be placed
//! in a URL query.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::DuoError;

/// Query/form parameters keyed by name, each holding one or more values.
///
/// Keys are kept ordered; value order is preserved as inserted and only sorted
/// during canonicalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, Vec<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all values under `key` with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), vec![value.into()]);
        self
    }

    /// Appends a value under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.entry(key.into()).or_default().push(value.into());
        self
    }

    /// First value under `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.values.iter()
    }

    /// Sets the page size. An explicit limit turns off automatic pagination.
    pub fn limit(mut self, limit: u64) -> Self {
        self.set("limit", limit.to_string());
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.set("offset", offset.to_string());
        self
    }

    /// Percent-encodes the map as `k=v&k=v` with keys in order, using `%20`
    /// for spaces.
    pub fn encode(&self) -> String {
        encode_pairs(
            self.values
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
        )
    }
}

pub(crate) fn encode_pairs<'a>(pairs: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    pairs
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}

/// JSON-valued parameters for V5-signed calls.
///
/// Serializes as a JSON object with keys in sorted order, so the body hash is
/// stable for a given set of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonParams {
    values: BTreeMap<String, Value>,
}

impl JsonParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Narrows every entry to a string value.
    ///
    /// # Errors
    ///
    /// Returns [`DuoError::ParameterType`] for the first non-string entry.
    /// Values are never stringified.
    pub fn to_query_params(&self) -> Result<Params, DuoError> {
        let mut params = Params::new();
        for (key, value) in &self.values {
            match value {
                Value::String(text) => {
                    params.set(key.clone(), text.clone());
                }
                other => {
                    return Err(DuoError::ParameterType {
                        key: key.clone(),
                        found: json_kind(other),
                    })
                }
            }
        }
        Ok(params)
    }
}

impl<K, V> FromIterator<(K, V)> for JsonParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
