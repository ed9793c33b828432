//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::AppResult;
use domain::{CreateUser, UpdateUser, User};

use crate::query::{self, EmailContains, Filter, Window};
use crate::store::RecordStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// List users in insertion order within `window`
    async fn list_users(&self, window: Window) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Apply the present fields of `patch`
    async fn update_user(&self, id: Uuid, patch: UpdateUser) -> AppResult<User>;

    /// Remove a user; its ID is never issued again
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    /// All users whose email contains `needle`, ignoring case
    async fn search_users_by_email(&self, needle: &str) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService over the in-memory store.
pub struct UserManager {
    store: Arc<RecordStore>,
}

impl UserManager {
    /// Create new user service instance with store
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        Ok(self.store.users(|users| users.insert(input))?)
    }

    async fn list_users(&self, window: Window) -> AppResult<Vec<User>> {
        Ok(self
            .store
            .users(|users| users.scan(|records| query::list::<User, _>(records, window, &[]))))
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        Ok(self.store.users(|users| users.get(id))?)
    }

    async fn update_user(&self, id: Uuid, patch: UpdateUser) -> AppResult<User> {
        Ok(self.store.users(|users| users.update(id, &patch))?)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        Ok(self.store.users(|users| users.delete(id))?)
    }

    async fn search_users_by_email(&self, needle: &str) -> AppResult<Vec<User>> {
        let filter: &dyn Filter<User> = &EmailContains(needle.to_string());
        Ok(self
            .store
            .users(|users| users.scan(|records| query::search(records, filter))))
    }
}
