//! Order and cardinality checking.
//!
//! The validator is the selector state machine: its state is the last
//! accepted category (`None` while empty), and each accepted append moves
//! that marker forward or keeps it in place.

use super::error::SelectorError;
use super::fragment::Category;

/// Tracks accepted categories and rejects invalid appends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    last: Option<Category>,
    seen: [bool; Category::COUNT],
}

impl Validator {
    /// Create a validator in the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted category, `None` while empty.
    pub fn state(&self) -> Option<Category> {
        self.last
    }

    /// Whether `category` has been accepted at least once.
    pub fn has_seen(&self, category: Category) -> bool {
        self.seen[category as usize]
    }

    /// Check `category` against the current state without changing it.
    pub fn check(&self, category: Category) -> Result<(), SelectorError> {
        if category.is_unique() && self.has_seen(category) {
            return Err(SelectorError::Cardinality { category });
        }
        match self.last {
            Some(previous) if category < previous => Err(SelectorError::Order {
                previous,
                next: category,
            }),
            _ => Ok(()),
        }
    }

    /// Check `category` and advance the state if it is accepted.
    ///
    /// On error the state is unchanged.
    pub fn accept(&mut self, category: Category) -> Result<(), SelectorError> {
        self.check(category)?;
        self.seen[category as usize] = true;
        self.last = Some(category);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    fn run(categories: &[Category]) -> Result<Validator, SelectorError> {
        let mut validator = Validator::new();
        for &c in categories {
            validator.accept(c)?;
        }
        Ok(validator)
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(Validator::new().state(), None);
    }

    #[test]
    fn test_full_order_accepted() {
        let v = run(&Category::ALL).unwrap();
        assert_eq!(v.state(), Some(PseudoElement));
        assert!(Category::ALL.iter().all(|&c| v.has_seen(c)));
    }

    #[test]
    fn test_repeatable_categories() {
        let v = run(&[Class, Class, Attribute, Attribute, PseudoClass, PseudoClass]).unwrap();
        assert_eq!(v.state(), Some(PseudoClass));
    }

    #[test]
    fn test_skipping_categories() {
        assert!(run(&[Element, PseudoElement]).is_ok());
        assert!(run(&[Id, Attribute]).is_ok());
    }

    #[test]
    fn test_unique_repeated() {
        for c in [Element, Id, PseudoElement] {
            assert_eq!(
                run(&[c, c]).unwrap_err(),
                SelectorError::Cardinality { category: c }
            );
        }
    }

    #[test]
    fn test_out_of_order() {
        assert_eq!(
            run(&[Class, Id]).unwrap_err(),
            SelectorError::Order {
                previous: Class,
                next: Id
            }
        );
        assert!(matches!(
            run(&[PseudoClass, Attribute]),
            Err(SelectorError::Order { .. })
        ));
    }

    #[test]
    fn test_cardinality_checked_before_order() {
        let err = run(&[Id, Class, Id]).unwrap_err();
        assert_eq!(err, SelectorError::Cardinality { category: Id });
    }

    #[test]
    fn test_rejected_append_keeps_state() {
        let mut v = run(&[Id, Class]).unwrap();
        let before = v;
        assert!(v.accept(Element).is_err());
        assert_eq!(v, before);
        assert!(v.accept(Attribute).is_ok());
    }
}
