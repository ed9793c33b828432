//! Item service - Handles item-related use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::AppResult;
use domain::{CreateItem, Item, UpdateItem};

use crate::query::{self, Filter, PriceRange, Window};
use crate::store::RecordStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Item service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Validate and store a new item
    async fn create_item(&self, input: CreateItem) -> AppResult<Item>;

    /// List items priced within `prices`, in insertion order, within `window`
    async fn list_items(&self, window: Window, prices: PriceRange) -> AppResult<Vec<Item>>;

    /// Get item by ID
    async fn get_item(&self, id: Uuid) -> AppResult<Item>;

    /// Apply the present fields of `patch`
    async fn update_item(&self, id: Uuid, patch: UpdateItem) -> AppResult<Item>;

    /// Remove an item; its ID is never issued again
    async fn delete_item(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ItemService over the in-memory store.
pub struct ItemManager {
    store: Arc<RecordStore>,
}

impl ItemManager {
    /// Create new item service instance with store
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ItemService for ItemManager {
    async fn create_item(&self, input: CreateItem) -> AppResult<Item> {
        Ok(self.store.items(|items| items.insert(input))?)
    }

    async fn list_items(&self, window: Window, prices: PriceRange) -> AppResult<Vec<Item>> {
        let filters: [&dyn Filter<Item>; 1] = [&prices];

        Ok(self
            .store
            .items(|items| items.scan(|records| query::list(records, window, &filters))))
    }

    async fn get_item(&self, id: Uuid) -> AppResult<Item> {
        Ok(self.store.items(|items| items.get(id))?)
    }

    async fn update_item(&self, id: Uuid, patch: UpdateItem) -> AppResult<Item> {
        Ok(self.store.items(|items| items.update(id, &patch))?)
    }

    async fn delete_item(&self, id: Uuid) -> AppResult<()> {
        Ok(self.store.items(|items| items.delete(id))?)
    }
}
