//! Record Service Library
//!
//! In-memory management of the user and item collections: identifier
//! assignment, partial updates, filtered and paginated listing, and
//! aggregate statistics. The HTTP gateway embeds it in-process.

pub mod container;
pub mod id;
pub mod query;
pub mod service;
pub mod stats;
pub mod store;

pub use container::Services;
pub use id::{IdGenerator, UuidGenerator};
pub use query::{EmailContains, Filter, PriceRange, Window};
pub use service::{
    AdminManager, AdminService, ItemManager, ItemService, RecordCounts, UserManager, UserService,
};
pub use store::{Collection, RecordStore};
