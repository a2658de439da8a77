//! JSON codec.
//!
//! Writes any `Serialize` value as JSON text and rebuilds typed values from
//! JSON text through an explicit [`Template`].
//!
//! # Modules
//!
//! - [`serialize`] - value → JSON text
//! - [`deserialize`] - JSON text → typed value
//! - [`template`] - field access and the `Template` trait
//! - [`error`] - Error types

mod deserialize;
mod error;
mod serialize;
mod template;

// Serialization (value → JSON)
pub use serialize::{serialize, serialize_with, strip_nulls};

// Deserialization (JSON → value)
pub use deserialize::{deserialize, deserialize_with, parse};

// Templates
pub use template::{Fields, Template};

// Errors
pub use error::CodecError;
