//! Selector validation errors.

use thiserror::Error;

use super::fragment::Category;

/// Error raised by a rejected fragment append.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A unique category was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than once inside the selector"
    )]
    Cardinality {
        /// The repeated category.
        category: Category,
    },

    /// A category was appended after a later one.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// Last accepted category.
        previous: Category,
        /// Rejected category.
        next: Category,
    },
}

impl SelectorError {
    /// The category whose append was rejected.
    pub fn category(&self) -> Category {
        match self {
            Self::Cardinality { category } => *category,
            Self::Order { next, .. } => *next,
        }
    }
}
