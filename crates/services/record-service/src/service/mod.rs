//! Service layer - Use cases over the record store.
//!
//! Handlers depend on these traits, not on the store, so they can be
//! swapped for mocks in tests.

mod admin_service;
mod item_service;
mod user_service;

pub use admin_service::{AdminManager, AdminService, RecordCounts};
pub use item_service::{ItemManager, ItemService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use admin_service::MockAdminService;
#[cfg(any(test, feature = "test-utils"))]
pub use item_service::MockItemService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
