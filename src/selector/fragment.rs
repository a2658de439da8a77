//! Selector fragments.

use std::fmt;

/// Fragment category, declared in the order fragments must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Element type, e.g. `div`.
    Element,
    /// `#id`.
    Id,
    /// `.class`.
    Class,
    /// `[attr]`.
    Attribute,
    /// `:pseudo-class`.
    PseudoClass,
    /// `::pseudo-element`.
    PseudoElement,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 6;

    /// All categories in required order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Element,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];

    /// Whether the category may occur at most once per selector.
    pub fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the fragment value.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment value.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One selector component with its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    /// Category of the component.
    pub category: Category,
    /// Undecorated value, inserted verbatim.
    pub value: String,
}

impl Fragment {
    /// Create a fragment.
    pub fn new(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.category.prefix(),
            self.value,
            self.category.suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert!(Category::Id < Category::Class);
        assert!(Category::PseudoClass < Category::PseudoElement);
    }

    #[test]
    fn test_unique_categories() {
        let unique: Vec<_> = Category::ALL.into_iter().filter(|c| c.is_unique()).collect();
        assert_eq!(
            unique,
            vec![Category::Element, Category::Id, Category::PseudoElement]
        );
    }

    #[test]
    fn test_fragment_display() {
        assert_eq!(Fragment::new(Category::Element, "a").to_string(), "a");
        assert_eq!(Fragment::new(Category::Id, "main").to_string(), "#main");
        assert_eq!(Fragment::new(Category::Class, "x").to_string(), ".x");
        assert_eq!(
            Fragment::new(Category::Attribute, "href$=\".png\"").to_string(),
            "[href$=\".png\"]"
        );
        assert_eq!(Fragment::new(Category::PseudoClass, "focus").to_string(), ":focus");
        assert_eq!(
            Fragment::new(Category::PseudoElement, "after").to_string(),
            "::after"
        );
    }
}
