//! Aggregate figures reported over both collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of both collections at the time it was generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Summary {
    pub users: UserStats,
    pub items: ItemStats,
    /// When the figures were computed
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserStats {
    /// Number of stored users
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItemStats {
    /// Number of stored items
    pub total: usize,
    /// Sum of price × quantity, rounded to cents
    #[cfg_attr(feature = "openapi", schema(example = 40.0))]
    pub total_inventory_value: f64,
    /// Mean item price, rounded to cents (0 when there are no items)
    #[cfg_attr(feature = "openapi", schema(example = 15.0))]
    pub average_price: f64,
}
