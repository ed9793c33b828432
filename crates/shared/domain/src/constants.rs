//! Domain-level constants.
//!
//! These constants define business rules and defaults shared by every layer.

// =============================================================================
// Entities
// =============================================================================

/// Display name of the user collection's record kind
pub const ENTITY_USER: &str = "User";

/// Display name of the item collection's record kind
pub const ENTITY_ITEM: &str = "Item";

// =============================================================================
// Defaults
// =============================================================================

/// Quantity assigned to an item when the caller leaves it out
pub const DEFAULT_ITEM_QUANTITY: i64 = 1;

// =============================================================================
// Pagination
// =============================================================================

/// Default number of records skipped by a listing
pub const DEFAULT_SKIP: usize = 0;

/// Default maximum number of records returned by a listing
pub const DEFAULT_LIMIT: usize = 10;

/// Largest page a caller may request
pub const MAX_LIMIT: usize = 100;
