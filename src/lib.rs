//! # shape-kit
//!
//! Three small, independent building blocks:
//!
//! - **Rectangle**: a width/height value with an on-demand area
//! - **Codec**: JSON text from any `Serialize` value, and typed values rebuilt
//!   from JSON text through an explicit [`Template`](codec::Template)
//! - **Selector builder**: CSS selector text assembled from validated fragments
//!
//! ## Quick Start
//!
//! ```
//! use shape_kit::prelude::*;
//!
//! let rect = make_rectangle(10.0, 20.0);
//! assert_eq!(rect.area(), 200.0);
//!
//! let text = serialize(&rect)?;
//! let back: Rectangle = deserialize(&text)?;
//! assert_eq!(back, rect);
//!
//! let selector = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.render(), "#main.container.editable");
//!
//! let combined = combine(element("ul")?, Combinator::Adjacent, element("p")?);
//! assert_eq!(combined.render(), "ul + p");
//! # Ok::<(), shape_kit::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Runtime configuration (codec output options)
//! - [`codec`]: JSON serialize/deserialize
//! - [`rectangle`]: Rectangle values
//! - [`selector`]: CSS selector builder

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use thiserror::Error;

pub mod codec;
pub mod config;
pub mod rectangle;
pub mod selector;

pub use codec::{deserialize, serialize, CodecError};
pub use rectangle::{make_rectangle, Rectangle};
pub use selector::{combine, Selector, SelectorBuilder, SelectorError};

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON codec failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Rejected selector fragment.
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// Result type alias using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use shape_kit::prelude::*;
/// ```
pub mod prelude {
    // Rectangle
    pub use crate::rectangle::{make_rectangle, Rectangle};

    // Codec
    pub use crate::codec::{
        deserialize, deserialize_with, parse, serialize, serialize_with, CodecError, Fields,
        Template,
    };

    // Selector
    pub use crate::selector::{
        attr, class, combine, element, id, pseudo_class, pseudo_element, Category, Combinator,
        Fragment, Selector, SelectorBuilder, SelectorError,
    };

    // Errors
    pub use crate::{Error, Result};
}
