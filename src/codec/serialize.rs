//! Value → JSON text.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use super::error::CodecError;
use crate::config::{self, Config};

/// Serialize a value to JSON text using the global configuration.
///
/// With the default configuration the output is compact canonical JSON:
///
/// ```
/// assert_eq!(shape_kit::codec::serialize(&[1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// Object key order is not guaranteed.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    serialize_with(value, config::get())
}

/// Serialize a value to JSON text with explicit options.
pub fn serialize_with<T: Serialize + ?Sized>(
    value: &T,
    config: &Config,
) -> Result<String, CodecError> {
    if !config.strip_nulls {
        return write(value, config.pretty);
    }
    let json = serde_json::to_value(value).map_err(CodecError::Serialize)?;
    write(&strip_nulls(json), config.pretty)
}

fn write<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CodecError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(CodecError::Serialize)
}

/// Recursively strip `null` values from JSON objects.
///
/// Array elements are kept in place, so `[1, null]` stays `[1, null]`.
pub fn strip_nulls(json: JsonValue) -> JsonValue {
    match json {
        JsonValue::Object(mut members) => {
            members.retain(|_, v| !v.is_null());
            let members: Map<String, JsonValue> = members
                .into_iter()
                .map(|(name, v)| (name, strip_nulls(v)))
                .collect();
            JsonValue::Object(members)
        }
        JsonValue::Array(items) => JsonValue::Array(items.into_iter().map(strip_nulls).collect()),
        scalar => scalar,
    }
}
