//! Admin service - Cross-collection statistics and reset.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::Summary;

use crate::stats;
use crate::store::RecordStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Current size of each collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    pub users: usize,
    pub items: usize,
}

/// Admin service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Aggregate figures over both collections
    async fn statistics(&self) -> AppResult<Summary>;

    /// Number of records in each collection
    async fn counts(&self) -> AppResult<RecordCounts>;

    /// Empty both collections
    async fn reset_all(&self) -> AppResult<()>;
}

/// Concrete implementation of AdminService over the in-memory store.
pub struct AdminManager {
    store: Arc<RecordStore>,
}

impl AdminManager {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AdminService for AdminManager {
    async fn statistics(&self) -> AppResult<Summary> {
        Ok(self.store.both(|users, items| {
            users.scan(|users| items.scan(|items| stats::aggregate(items, users)))
        }))
    }

    async fn counts(&self) -> AppResult<RecordCounts> {
        Ok(self.store.both(|users, items| RecordCounts {
            users: users.len(),
            items: items.len(),
        }))
    }

    async fn reset_all(&self) -> AppResult<()> {
        self.store.reset();
        Ok(())
    }
}
