//! Rectangle values.

use serde::Serialize;

use crate::codec::{CodecError, Fields, Template};

/// A width/height pair with a derived area.
///
/// Area is not stored; [`area`](Self::area) reads the current fields on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle. Inputs are not validated.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Create a rectangle from its width and height.
///
/// ```
/// let r = shape_kit::make_rectangle(10.0, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
pub fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

impl Template for Rectangle {
    const NAME: &'static str = "rectangle";

    fn from_fields(fields: &Fields) -> Result<Self, CodecError> {
        Ok(Self::new(fields.number("width")?, fields.number("height")?))
    }

    fn recognized() -> &'static [&'static str] {
        &["width", "height"]
    }
}
