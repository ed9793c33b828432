//! Domain layer - Records, change payloads and the rules that govern them.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every record type here knows how to build itself from a validated draft
//! and how to merge a sparse patch into a new value.

pub mod constants;
pub mod error;
pub mod item;
pub mod record;
pub mod summary;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult, FieldViolation};
pub use item::{CreateItem, Item, UpdateItem};
pub use record::Record;
pub use summary::{ItemStats, Summary, UserStats};
pub use user::{CreateUser, UpdateUser, User};
