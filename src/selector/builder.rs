//! Compound selector builder.

use std::fmt;

use super::error::SelectorError;
use super::fragment::{Category, Fragment};
use super::validate::Validator;

/// Builder for a compound CSS selector.
///
/// Fragments are kept in append order and rendered on demand. Each append
/// is validated first; a rejected append returns the error and leaves no
/// fragment behind.
///
/// # Example
///
/// ```
/// use shape_kit::selector::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .element("a")?
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?
///     .render();
/// assert_eq!(selector, r#"a[href$=".png"]:focus"#);
/// # Ok::<(), shape_kit::selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
    validator: Validator,
}

impl SelectorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment after validating its category.
    pub fn push(mut self, fragment: Fragment) -> Result<Self, SelectorError> {
        if let Err(e) = self.validator.accept(fragment.category) {
            log::debug!("rejected {} fragment '{}': {}", e.category(), fragment.value, e);
            return Err(e);
        }
        log::trace!("appended {} fragment '{}'", fragment.category, fragment.value);
        self.fragments.push(fragment);
        Ok(self)
    }

    fn append(self, category: Category, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Fragment::new(category, value))
    }

    /// Append an element type. At most once.
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// Append an id, rendered as `#value`. At most once.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// Append a class, rendered as `.value`.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// Append an attribute condition, rendered as `[value]`.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// Append a pseudo-class, rendered as `:value`.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// Append a pseudo-element, rendered as `::value`. At most once.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Fragments in append order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether no fragment has been appended.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Last accepted category, `None` while empty.
    pub fn state(&self) -> Option<Category> {
        self.validator.state()
    }

    /// Render the selector text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.iter().try_for_each(|frag| write!(f, "{frag}"))
    }
}

// Entry points: each call starts a fresh builder.

/// Start a selector with an element type.
pub fn element(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(value)
}

/// Start a selector with an id.
pub fn id(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(value)
}

/// Start a selector with a class.
pub fn class(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(value)
}

/// Start a selector with an attribute condition.
pub fn attr(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attr(value)
}

/// Start a selector with a pseudo-class.
pub fn pseudo_class(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a selector with a pseudo-element.
pub fn pseudo_element(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_empty() {
        let builder = SelectorBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.render(), "");
    }

    #[test]
    fn test_id_and_classes() {
        let s = id("main").unwrap().class("container").unwrap().class("editable").unwrap();
        assert_eq!(s.render(), "#main.container.editable");
    }

    #[test]
    fn test_element_attr_pseudo_class() {
        let s = element("a")
            .and_then(|b| b.attr(r#"href$=".png""#))
            .and_then(|b| b.pseudo_class("focus"))
            .unwrap();
        assert_eq!(s.render(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn test_every_category() {
        let s = element("div")
            .and_then(|b| b.id("nav"))
            .and_then(|b| b.class("a"))
            .and_then(|b| b.attr("data-x"))
            .and_then(|b| b.pseudo_class("hover"))
            .and_then(|b| b.pseudo_element("before"))
            .unwrap();
        assert_eq!(s.render(), "div#nav.a[data-x]:hover::before");
        assert_eq!(s.fragments().len(), 6);
        assert_eq!(s.state(), Some(Category::PseudoElement));
    }

    #[test]
    fn test_entry_points_are_fresh() {
        let first = element("p").unwrap();
        let second = element("span").unwrap();
        assert_eq!(first.render(), "p");
        assert_eq!(second.render(), "span");
        assert!(pseudo_element("after").is_ok());
        assert!(attr("title").is_ok());
        assert!(pseudo_class("hover").is_ok());
    }

    #[test]
    fn test_repeated_id_fails() {
        let err = id("x").unwrap().id("y").unwrap_err();
        assert_eq!(err, SelectorError::Cardinality { category: Category::Id });
        assert_eq!(
            err.to_string(),
            "Element, id and pseudo-element should not occur more than once inside the selector"
        );
    }

    #[test]
    fn test_repeated_element_and_pseudo_element_fail() {
        assert!(matches!(
            element("a").unwrap().element("b"),
            Err(SelectorError::Cardinality { .. })
        ));
        assert!(matches!(
            pseudo_element("a").unwrap().pseudo_element("b"),
            Err(SelectorError::Cardinality { .. })
        ));
    }

    #[test]
    fn test_id_after_class_fails() {
        let err = class("x").unwrap().id("y").unwrap_err();
        assert_eq!(
            err,
            SelectorError::Order {
                previous: Category::Class,
                next: Category::Id
            }
        );
        assert!(err.to_string().starts_with("Selector parts should be arranged"));
    }

    #[test]
    fn test_error_reports_rejected_category() {
        let err = id("x").unwrap().id("y").unwrap_err();
        assert_eq!(err.category(), Category::Id);

        let err = pseudo_class("hover").unwrap().attr("lang").unwrap_err();
        assert_eq!(err.category(), Category::Attribute);
    }

    #[test]
    fn test_class_after_id_accepted() {
        assert_eq!(id("a").unwrap().class("b").unwrap().render(), "#a.b");
    }

    #[test]
    fn test_render_is_repeatable() {
        let s = class("a").unwrap();
        let first = s.render();
        let s = s.class("b").unwrap();
        assert_eq!(first, ".a");
        assert_eq!(s.render(), ".a.b");
        assert_eq!(s.render(), s.to_string());
    }

    #[test]
    fn test_push_fragment() {
        let s = SelectorBuilder::new()
            .push(Fragment::new(Category::Attribute, "lang"))
            .unwrap();
        assert_eq!(s.render(), "[lang]");
    }
}
