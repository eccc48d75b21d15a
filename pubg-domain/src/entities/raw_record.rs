// Raw wire record
// One JSON object exactly as the API sent it

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Accessors never fail: a missing field, a `null`, or a value of the wrong
// JSON type all read as `None`. Callers decide the absent-value policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn string_or_default(&self, key: &str) -> String {
        self.str_field(key).unwrap_or_default().to_string()
    }

    pub fn i64_field(&self, key: &str) -> Option<i64> {
        let value = self.get(key)?;
        value.as_i64().or_else(|| integral_float(value))
    }

    pub fn f64_field(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn object(&self, key: &str) -> Option<RawRecord> {
        match self.get(key)? {
            Value::Object(fields) => Some(RawRecord(fields.clone())),
            _ => None,
        }
    }

    pub fn path(&self, dotted: &str) -> Option<&Value> {
        let mut segments = dotted.split('.');
        let first = segments.next()?;
        let mut current = self.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
            if current.is_null() {
                return None;
            }
        }
        Some(current)
    }

    pub fn without_nulls(&self) -> Map<String, Value> {
        strip_nulls(&self.0)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.without_nulls()))
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn strip_nulls(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), strip_value(value)))
        .collect()
}

fn strip_value(value: &Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(strip_nulls(fields)),
        Value::Array(items) => Value::Array(items.iter().map(strip_value).collect()),
        Value::Number(number) if number.is_f64() => match integral_float(value) {
            Some(whole) => Value::from(whole),
            None => Value::Number(number.clone()),
        },
        other => other.clone(),
    }
}

fn integral_float(value: &Value) -> Option<i64> {
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
