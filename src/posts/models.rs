// Post records as they appear in the input JSON.
//
// `text` is mandatory. `age` is kept as raw JSON because real exports carry
// numbers, numeric strings, and junk in that field; it is only interpreted
// when an age bound is active. Everything else lands in `attributes`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single social media post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
    /// Open-ended metadata (gender, region, ...) used by attribute filters.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Post {
    /// Build a post with only text. Mostly useful in tests.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            age: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_age(mut self, age: impl Into<Value>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Interpret the `age` field as an integer.
    ///
    /// Integers are taken as-is, finite floats truncate toward zero, and
    /// strings are trimmed and parsed as base-10. Anything else is `None`.
    pub fn parsed_age(&self) -> Option<i64> {
        match self.age.as_ref()? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i)
                } else if let Some(f) = n.as_f64() {
                    let t = f.trunc();
                    (t.is_finite() && t >= i64::MIN as f64 && t <= i64::MAX as f64)
                        .then_some(t as i64)
                } else {
                    None
                }
            }
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// String form of an attribute, or `None` if the post doesn't carry it.
    ///
    /// `text` and `age` are addressable like any other attribute.
    pub fn attribute(&self, key: &str) -> Option<String> {
        match key {
            "text" => Some(self.text.clone()),
            "age" => self.age.as_ref().and_then(stringify),
            _ => self.attributes.get(key).and_then(stringify),
        }
    }
}

/// Render a scalar JSON value the way it reads in the source file.
/// Null and nested structures count as absent.
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
