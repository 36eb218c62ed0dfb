use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

/// A DynamoDB item as returned by the store.
///
/// Items are never modified after they are read; the builder methods exist to
/// assemble lookup keys.
///
/// # Example
///
/// ```
/// let key = Item::new().set_string("date", "2024-01-01");
/// assert_eq!(key.get_string("date"), Some("2024-01-01"));
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl From<HashMap<String, AttributeValue>> for Item {
    fn from(attributes: HashMap<String, AttributeValue>) -> Self {
        Self { attributes }
    }
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string attribute.
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .and_then(|av| av.as_s().ok())
            .map(String::as_str)
    }

    /// Renders a single attribute for human-readable output.
    ///
    /// Scalars print as-is; documents and sets print as compact JSON.
    pub fn display_value(&self, key: &str) -> Option<String> {
        if let Some(s) = self.get_string(key) {
            return Some(s.to_string());
        }
        self.get(key).map(|av| match av {
            AttributeValue::N(n) => n.clone(),
            AttributeValue::Bool(b) => b.to_string(),
            other => attribute_to_json(other).to_string(),
        })
    }

    /// Converts the item to a JSON object with keys in sorted order.
    pub fn to_json(&self) -> Value {
        let mut keys: Vec<&String> = self.attributes.keys().collect();
        keys.sort();

        let map: Map<String, Value> = keys
            .into_iter()
            .map(|k| (k.clone(), attribute_to_json(&self.attributes[k])))
            .collect();
        Value::Object(map)
    }
}

/// Converts an attribute value to JSON.
///
/// Values JSON cannot carry natively are coerced to strings: numbers that do not
/// fit `i64`/`f64` keep their decimal text, binary is base64-encoded.
pub fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::L(list) => Value::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => Item::from(map.clone()).to_json(),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.iter().map(|n| number_to_json(n)).collect()),
        AttributeValue::Bs(set) => Value::Array(
            set.iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        _ => Value::Null,
    }
}

fn number_to_json(n: &str) -> Value {
    if let Ok(i) = n.parse::<i64>() {
        return Value::Number(i.into());
    }
    n.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.to_string() == n)
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}
