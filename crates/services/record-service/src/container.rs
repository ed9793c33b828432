//! Service Container - Centralized service access.
//!
//! Wires the three services to one shared [`RecordStore`] and hands them out
//! as trait objects.

use std::sync::Arc;

use crate::id::{IdGenerator, UuidGenerator};
use crate::service::{
    AdminManager, AdminService, ItemManager, ItemService, UserManager, UserService,
};
use crate::store::RecordStore;

/// All services of the record store.
#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn UserService>,
    item_service: Arc<dyn ItemService>,
    admin_service: Arc<dyn AdminService>,
}

impl Services {
    /// Create a container from already built services (e.g. mocks)
    pub fn new(
        user_service: Arc<dyn UserService>,
        item_service: Arc<dyn ItemService>,
        admin_service: Arc<dyn AdminService>,
    ) -> Self {
        Self {
            user_service,
            item_service,
            admin_service,
        }
    }

    /// Empty in-memory store with random identifiers
    pub fn in_memory() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    /// Empty in-memory store drawing identifiers from `ids`
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        let store = Arc::new(RecordStore::new(ids));

        Self {
            user_service: Arc::new(UserManager::new(store.clone())),
            item_service: Arc::new(ItemManager::new(store.clone())),
            admin_service: Arc::new(AdminManager::new(store)),
        }
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    pub fn items(&self) -> Arc<dyn ItemService> {
        self.item_service.clone()
    }

    pub fn admin(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }
}
