use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Serde helpers for reading the analysis response defensively: a field of the wrong
/// shape is treated as absent instead of failing the whole document.
pub struct ValueHelper;

impl ValueHelper {
    /// Renders a JSON value the way it should appear in a list entry.
    pub fn stringify(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => Self::stringify(other),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => value.to_string(),
        }
    }

    /// Falsy JSON values collapse to the empty string.
    pub fn text_or_empty(value: &Value) -> String {
        if Self::is_falsy(value) {
            String::new()
        } else {
            Self::stringify(value)
        }
    }

    pub fn is_falsy(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    /// Struct-shaped fields accept only JSON objects. Serde would otherwise fill a
    /// struct from an array by position.
    pub fn lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::object_or_default(value))
    }

    pub fn object_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => T::default(),
        }
    }

    pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::text_or_empty(&value))
    }

    pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items.iter().map(Self::stringify).collect(),
            _ => Vec::new(),
        })
    }
}
