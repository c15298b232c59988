//! The item record managed by the service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored item record.
///
/// `id` is server-assigned at creation time and immutable afterwards.
/// `description` is the only optional field and encodes as JSON `null`
/// when absent; responses never omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Server-assigned unique identifier, strictly increasing from 1.
    #[schema(example = 1)]
    pub id: u64,
    /// Display name of the item.
    #[schema(example = "Pen")]
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price.
    #[schema(example = 1.5)]
    pub price: f64,
    /// Grouping category.
    #[schema(example = "office")]
    pub category: String,
}

/// An item without its identifier: the validated input to create and
/// update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    /// Display name of the item.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Grouping category.
    pub category: String,
}

impl ItemDraft {
    /// Materialise the draft into a stored record with the given id.
    pub fn into_item(self, id: u64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn pen_draft() -> ItemDraft {
        ItemDraft {
            name: "Pen".to_owned(),
            description: None,
            price: 1.5,
            category: "office".to_owned(),
        }
    }

    #[rstest]
    fn into_item_assigns_the_given_id() {
        let item = pen_draft().into_item(7);
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Pen");
        assert_eq!(item.category, "office");
    }

    #[rstest]
    fn absent_description_serialises_as_null() {
        let value = serde_json::to_value(pen_draft().into_item(1)).expect("item serialises");
        assert_eq!(value.get("description"), Some(&json!(null)));
    }
}
