//! Identifier generation for new records.

use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of identifiers for newly created records.
///
/// Every call must return a value distinct from all previous ones for the
/// lifetime of the process. No ordering is implied.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random 128-bit (v4) identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
