//! Combining selectors.

use std::fmt;

use super::builder::SelectorBuilder;

/// Common CSS combinators.
///
/// [`combine`] accepts any string; these are provided for convenience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// ` ` (descendant).
    Descendant,
    /// `>` (child).
    Child,
    /// `+` (adjacent sibling).
    Adjacent,
    /// `~` (general sibling).
    Sibling,
}

impl Combinator {
    /// Combinator token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::Adjacent => "+",
            Self::Sibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A compound selector or two selectors joined by a combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Single compound selector.
    Compound(SelectorBuilder),
    /// `left combinator right`.
    Combined {
        /// Left-hand selector.
        left: Box<Selector>,
        /// Combinator token, inserted verbatim.
        combinator: String,
        /// Right-hand selector.
        right: Box<Selector>,
    },
}

impl Selector {
    /// Join `self` with `right`. See [`combine`].
    pub fn combine(self, combinator: impl AsRef<str>, right: impl Into<Selector>) -> Selector {
        combine(self, combinator, right)
    }

    /// Render the selector text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<SelectorBuilder> for Selector {
    fn from(builder: SelectorBuilder) -> Self {
        Self::Compound(builder)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(builder) => write!(f, "{builder}"),
            Self::Combined {
                left,
                combinator,
                right,
            } => write!(f, "{left} {combinator} {right}"),
        }
    }
}

/// Join two selectors as `"<left> <combinator> <right>"`.
///
/// Both sides were validated when built. The combinator is not checked.
///
/// ```
/// use shape_kit::selector::{combine, element, id};
///
/// let s = combine(element("ul")?, ">", id("menu")?);
/// assert_eq!(s.render(), "ul > #menu");
/// # Ok::<(), shape_kit::selector::SelectorError>(())
/// ```
pub fn combine(
    left: impl Into<Selector>,
    combinator: impl AsRef<str>,
    right: impl Into<Selector>,
) -> Selector {
    Selector::Combined {
        left: Box::new(left.into()),
        combinator: combinator.as_ref().to_string(),
        right: Box::new(right.into()),
    }
}
