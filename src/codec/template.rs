//! Explicit construction of typed values from parsed JSON objects.

use serde_json::{Map, Value as JsonValue};

use super::error::CodecError;

/// A type that can be built from the fields of a parsed JSON object.
///
/// The implementation copies the fields it recognizes and ignores the rest.
/// Behaviour lives on the type itself; the parsed text only supplies data.
///
/// # Example
///
/// ```
/// use shape_kit::codec::{deserialize, CodecError, Fields, Template};
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl Template for Circle {
///     const NAME: &'static str = "circle";
///
///     fn from_fields(fields: &Fields) -> Result<Self, CodecError> {
///         Ok(Self { radius: fields.number("radius")? })
///     }
/// }
///
/// let circle: Circle = deserialize(r#"{"radius":10}"#).unwrap();
/// assert_eq!(circle.radius, 10.0);
/// ```
pub trait Template: Sized {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Build a value from parsed fields.
    fn from_fields(fields: &Fields) -> Result<Self, CodecError>;

    /// Field names this template reads, used to report the ones it drops.
    ///
    /// An empty slice disables the report.
    fn recognized() -> &'static [&'static str] {
        &[]
    }
}

/// Read-only view over a parsed JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, JsonValue>,
}

impl<'a> Fields<'a> {
    /// Wrap a JSON object.
    pub fn new(map: &'a Map<String, JsonValue>) -> Self {
        Self { map }
    }

    /// Wrap a JSON value, failing if it is not an object.
    pub fn from_value(json: &'a JsonValue) -> Result<Self, CodecError> {
        json.as_object()
            .map(Self::new)
            .ok_or_else(|| CodecError::NotObject(json_type_name(json)))
    }

    /// Raw field value, if present.
    pub fn value(&self, name: &str) -> Option<&'a JsonValue> {
        self.map.get(name)
    }

    /// Field names in the parsed object.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    /// Field names not in `recognized`.
    pub fn unrecognized(&self, recognized: &[&str]) -> Vec<&'a str> {
        self.keys().filter(|k| !recognized.contains(k)).collect()
    }

    fn required(&self, name: &str) -> Result<&'a JsonValue, CodecError> {
        self.map
            .get(name)
            .ok_or_else(|| CodecError::MissingField(name.to_string()))
    }

    /// Required numeric field.
    pub fn number(&self, name: &str) -> Result<f64, CodecError> {
        let value = self.required(name)?;
        value.as_f64().ok_or_else(|| type_error(name, "number", value))
    }

    /// Numeric field that may be absent or `null`.
    pub fn optional_number(&self, name: &str) -> Result<Option<f64>, CodecError> {
        match self.map.get(name) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| type_error(name, "number", value)),
        }
    }

    /// Required string field.
    pub fn string(&self, name: &str) -> Result<&'a str, CodecError> {
        let value = self.required(name)?;
        value.as_str().ok_or_else(|| type_error(name, "string", value))
    }

    /// Required boolean field.
    pub fn bool(&self, name: &str) -> Result<bool, CodecError> {
        let value = self.required(name)?;
        value.as_bool().ok_or_else(|| type_error(name, "bool", value))
    }
}

fn type_error(field: &str, expected: &'static str, found: &JsonValue) -> CodecError {
    CodecError::FieldType {
        field: field.to_string(),
        expected,
        found: json_type_name(found),
    }
}

pub(crate) fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
