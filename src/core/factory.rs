use crate::domain::model::{DigitalItem, PhysicalItem};
use crate::domain::ports::Item;
use crate::utils::error::{LibraryError, Result};

/// Builds a concrete item from a kind tag. The tags mirror the catalog's
/// import format: `"digital"` and `"fisico"`, matched case-insensitively.
pub struct ItemFactory;

impl ItemFactory {
    pub fn create(kind: &str, title: &str, author: &str) -> Result<Box<dyn Item>> {
        if kind.eq_ignore_ascii_case("digital") {
            tracing::debug!("Creating digital item: {}", title);
            Ok(Box::new(DigitalItem::new(title, author)))
        } else if kind.eq_ignore_ascii_case("fisico") {
            tracing::debug!("Creating physical item: {}", title);
            Ok(Box::new(PhysicalItem::new(title, author)))
        } else {
            Err(LibraryError::UnknownKind {
                kind: kind.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_digital() {
        let item = ItemFactory::create("digital", "Design Patterns", "GoF").unwrap();
        assert_eq!(item.render(), "[E-Book] Design Patterns - GoF");
    }

    #[test]
    fn test_create_physical() {
        let item = ItemFactory::create("fisico", "Clean Code", "Robert C. Martin").unwrap();
        assert_eq!(item.render(), "[Físico] Clean Code - Robert C. Martin");
    }

    #[test]
    fn test_kind_matching_is_case_insensitive() {
        let item = ItemFactory::create("DIGITAL", "Design Patterns", "GoF").unwrap();
        assert_eq!(item.render(), "[E-Book] Design Patterns - GoF");

        let item = ItemFactory::create("FiSiCo", "Clean Code", "Robert C. Martin").unwrap();
        assert_eq!(item.render(), "[Físico] Clean Code - Robert C. Martin");
    }

    #[test]
    fn test_unknown_kind_fails() {
        let err = ItemFactory::create("braille", "Clean Code", "Robert C. Martin")
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Unknown item kind: braille");
    }
}
