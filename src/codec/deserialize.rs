//! JSON text → typed value.

use serde_json::Value as JsonValue;

use super::error::CodecError;
use super::template::{Fields, Template};

/// Parse JSON text into a structural value.
pub fn parse(text: &str) -> Result<JsonValue, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Parse)
}

/// Parse JSON text and build a `T` from its fields.
///
/// Every field of the result comes from the text; behaviour comes from `T`.
/// Fields the template does not read are dropped.
pub fn deserialize<T: Template>(text: &str) -> Result<T, CodecError> {
    let json = parse(text)?;
    let fields = Fields::from_value(&json)?;

    let recognized = T::recognized();
    if !recognized.is_empty() {
        let dropped = fields.unrecognized(recognized);
        if !dropped.is_empty() {
            log::debug!("{}: ignoring unrecognized fields {:?}", T::NAME, dropped);
        }
    }

    T::from_fields(&fields)
}

/// Parse JSON text and build a value through an explicit factory.
///
/// # Example
///
/// ```
/// use shape_kit::codec::deserialize_with;
///
/// let radius = deserialize_with(|f| f.number("radius"), r#"{"radius":3}"#).unwrap();
/// assert_eq!(radius, 3.0);
/// ```
pub fn deserialize_with<T, F>(factory: F, text: &str) -> Result<T, CodecError>
where
    F: FnOnce(&Fields) -> Result<T, CodecError>,
{
    let json = parse(text)?;
    factory(&Fields::from_value(&json)?)
}
