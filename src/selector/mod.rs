//! CSS selector builder.
//!
//! Builds selector text from fragments appended in a fixed category order:
//! element, id, class, attribute, pseudo-class, pseudo-element. Element, id
//! and pseudo-element may occur once per compound selector.
//!
//! # Modules
//!
//! - [`fragment`] - fragment categories and rendering
//! - [`validate`] - order and cardinality checking
//! - [`builder`] - compound selector builder
//! - [`combine`] - combinators and combined selectors
//! - [`error`] - Error types

mod builder;
mod combine;
mod error;
mod fragment;
mod validate;

// Fragments
pub use fragment::{Category, Fragment};

// Validation
pub use validate::Validator;

// Builder
pub use builder::{
    attr, class, element, id, pseudo_class, pseudo_element, SelectorBuilder,
};

// Combination
pub use combine::{combine, Combinator, Selector};

// Errors
pub use error::SelectorError;
