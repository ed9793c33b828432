//! The contract every stored record type fulfils.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainResult;

/// A value stored in a collection.
///
/// Identity (`id`, `created_at`) is assigned once by [`Record::create`] and
/// carried unchanged through every [`Record::merge`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Payload accepted on creation
    type Draft: Send;
    /// Sparse payload accepted on update
    type Patch: Send + Sync;

    /// Display name used in error messages and logs
    const KIND: &'static str;

    /// Validate `draft` and build a record with the server-assigned identity.
    fn create(id: Uuid, created_at: DateTime<Utc>, draft: Self::Draft) -> DomainResult<Self>;

    /// Validate `patch` and return a new record with its present fields applied.
    ///
    /// `self` is never modified, so a rejected patch leaves the original intact.
    fn merge(&self, patch: &Self::Patch) -> DomainResult<Self>;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;
}
