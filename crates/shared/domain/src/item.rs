//! Item domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{DEFAULT_ITEM_QUANTITY, ENTITY_ITEM};
use crate::error::DomainResult;
use crate::record::Record;

/// Item domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Item {
    /// Unique item identifier
    pub id: Uuid,
    /// Item title
    #[cfg_attr(feature = "openapi", schema(example = "Sample Product"))]
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Unit price, always greater than zero
    #[cfg_attr(feature = "openapi", schema(example = 99.99))]
    pub price: f64,
    /// Units in stock
    #[cfg_attr(feature = "openapi", schema(example = 10))]
    pub quantity: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Item creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateItem {
    /// Item title (1-200 characters)
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Sample Product"))]
    pub title: String,
    /// Optional description
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "This is a sample product"))]
    pub description: Option<String>,
    /// Unit price (> 0)
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    #[cfg_attr(feature = "openapi", schema(example = 99.99))]
    pub price: f64,
    /// Units in stock (>= 0, defaults to 1)
    #[serde(default = "default_quantity")]
    #[validate(range(min = 0, message = "quantity must be greater than or equal to 0"))]
    #[cfg_attr(feature = "openapi", schema(example = 10))]
    pub quantity: i64,
}

/// Item update data transfer object
///
/// `description` distinguishes an absent key (keep) from an explicit `null`
/// (clear).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateItem {
    /// New title
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    /// New description, `null` clears it
    #[serde(default, deserialize_with = "present")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub description: Option<Option<String>>,
    /// New unit price
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: Option<f64>,
    /// New stock level
    #[validate(range(min = 0, message = "quantity must be greater than or equal to 0"))]
    pub quantity: Option<i64>,
}

fn default_quantity() -> i64 {
    DEFAULT_ITEM_QUANTITY
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Item {
    /// Stock value of this line (price × quantity)
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Whether the price lies within the inclusive bounds that are set
    pub fn price_within(&self, min: Option<f64>, max: Option<f64>) -> bool {
        min.map_or(true, |min| self.price >= min) && max.map_or(true, |max| self.price <= max)
    }
}

impl Record for Item {
    type Draft = CreateItem;
    type Patch = UpdateItem;

    const KIND: &'static str = ENTITY_ITEM;

    fn create(id: Uuid, created_at: DateTime<Utc>, draft: CreateItem) -> DomainResult<Self> {
        draft.validate()?;

        Ok(Self {
            id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            quantity: draft.quantity,
            created_at,
        })
    }

    fn merge(&self, patch: &UpdateItem) -> DomainResult<Self> {
        patch.validate()?;

        let description = match &patch.description {
            Some(description) => description.clone(),
            None => self.description.clone(),
        };

        Ok(Self {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description,
            price: patch.price.unwrap_or(self.price),
            quantity: patch.quantity.unwrap_or(self.quantity),
            created_at: self.created_at,
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        let draft = CreateItem {
            title: "Widget".to_string(),
            description: Some("blue".to_string()),
            price: 9.99,
            quantity: 5,
        };
        Item::create(Uuid::new_v4(), Utc::now(), draft).unwrap()
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let draft: CreateItem = serde_json::from_str(r#"{"title":"Pen","price":1.5}"#).unwrap();
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_create_rejects_non_positive_price() {
        let draft = CreateItem {
            title: "Free".to_string(),
            description: None,
            price: 0.0,
            quantity: 1,
        };

        let err = Item::create(Uuid::new_v4(), Utc::now(), draft).unwrap_err();
        assert_eq!(err.fields(), vec!["price"]);
    }

    #[test]
    fn test_create_rejects_negative_quantity_and_empty_title() {
        let draft = CreateItem {
            title: String::new(),
            description: None,
            price: 1.0,
            quantity: -1,
        };

        let err = Item::create(Uuid::new_v4(), Utc::now(), draft).unwrap_err();
        assert_eq!(err.fields(), vec!["quantity", "title"]);
    }

    #[test]
    fn test_merge_changes_only_quantity() {
        let item = widget();
        let patch = UpdateItem {
            quantity: Some(10),
            ..Default::default()
        };

        let merged = item.merge(&patch).unwrap();
        assert_eq!(merged.quantity, 10);
        assert_eq!(merged.price, item.price);
        assert_eq!(merged.title, item.title);
        assert_eq!(merged.description, item.description);
        assert_eq!(merged.id, item.id);
    }

    #[test]
    fn test_merge_rejects_negative_price_and_keeps_original() {
        let item = widget();
        let patch = UpdateItem {
            price: Some(-5.0),
            title: Some("Gadget".to_string()),
            ..Default::default()
        };

        assert!(item.merge(&patch).is_err());
        assert_eq!(item.title, "Widget");
        assert_eq!(item.price, 9.99);
    }

    #[test]
    fn test_patch_null_description_clears_it() {
        let patch: UpdateItem = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(patch.description, Some(None));

        let merged = widget().merge(&patch).unwrap();
        assert_eq!(merged.description, None);
    }

    #[test]
    fn test_patch_absent_description_keeps_it() {
        let patch: UpdateItem = serde_json::from_str(r#"{"title":"Gizmo"}"#).unwrap();
        assert_eq!(patch.description, None);

        let merged = widget().merge(&patch).unwrap();
        assert_eq!(merged.title, "Gizmo");
        assert_eq!(merged.description.as_deref(), Some("blue"));
    }

    #[test]
    fn test_price_within_bounds() {
        let item = widget();
        assert!(item.price_within(None, None));
        assert!(item.price_within(Some(9.99), Some(9.99)));
        assert!(!item.price_within(Some(10.0), None));
        assert!(!item.price_within(None, Some(5.0)));
    }
}
