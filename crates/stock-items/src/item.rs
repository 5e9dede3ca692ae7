use serde::{Deserialize, Serialize};

use barstock_core::{DomainError, DomainResult, StockItemId};

/// A persisted stock item.
///
/// The identifier is assigned by storage on insert and never changes.
/// Every persisted record has non-empty `name` and `description`; the
/// invariant is enforced by [`StockItemInput::validate`] before any
/// write, not by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub name: String,
    pub description: String,
}

/// Validated stock item fields, ready to be written.
///
/// Only obtainable through [`StockItemInput::validate`], so both fields
/// are known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStockItem {
    pub name: String,
    pub description: String,
}

/// Stock item fields as received from a client, not yet validated.
///
/// Both fields are optional so that a missing field is reported as a
/// validation failure rather than a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct StockItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl StockItemInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Check the non-empty invariant and produce writable fields.
    ///
    /// A field is rejected when it is missing or zero-length; whitespace
    /// is not trimmed.
    pub fn validate(self) -> DomainResult<NewStockItem> {
        let name = self.name.filter(|name| !name.is_empty());
        let description = self.description.filter(|description| !description.is_empty());

        match (name, description) {
            (Some(name), Some(description)) => Ok(NewStockItem { name, description }),
            _ => Err(DomainError::validation(
                "stock item name or description cannot be empty",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_input() {
        let fields = StockItemInput::new("Smith & Cross Rum", "Da Funk Bomb")
            .validate()
            .unwrap();

        assert_eq!(fields.name, "Smith & Cross Rum");
        assert_eq!(fields.description, "Da Funk Bomb");
    }

    #[test]
    fn validate_rejects_missing_description() {
        let input = StockItemInput {
            name: Some("rum".to_string()),
            description: None,
        };

        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("stock item name or description cannot be empty")
        );
    }

    #[test]
    fn validate_rejects_missing_name() {
        let input = StockItemInput {
            name: None,
            description: Some("Da Funk Bomb".to_string()),
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let err = StockItemInput::new("", "Da Funk Bomb").validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "stock item name or description cannot be empty");
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_does_not_trim_whitespace() {
        // The non-empty check matches the source behavior: whitespace-only
        // fields are accepted.
        let fields = StockItemInput::new("  ", "Da Funk Bomb").validate().unwrap();
        assert_eq!(fields.name, "  ");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any pair of non-empty fields validates and is
            /// carried through unchanged.
            #[test]
            fn non_empty_fields_validate(
                name in ".{1,60}",
                description in ".{1,200}"
            ) {
                let fields = StockItemInput::new(name.clone(), description.clone())
                    .validate()
                    .unwrap();

                prop_assert_eq!(fields.name, name);
                prop_assert_eq!(fields.description, description);
            }

            /// Property: an empty field fails no matter what the other
            /// field holds.
            #[test]
            fn empty_field_fails(description in ".{0,200}") {
                let input = StockItemInput::new("", description);
                prop_assert!(input.validate().is_err());
            }
        }
    }
}
