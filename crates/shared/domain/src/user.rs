//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_USER;
use crate::error::DomainResult;
use crate::record::Record;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Ramesh Kumar Sah"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "ramesh@example.com"))]
    pub email: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 25))]
    pub age: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// User creation data transfer object
///
/// Identity fields sent by the caller are ignored during deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User display name (1-100 characters)
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ramesh Kumar Sah"))]
    pub name: String,
    /// User email address
    #[validate(email(message = "email must be a valid email address"))]
    #[cfg_attr(feature = "openapi", schema(example = "ramesh@example.com"))]
    pub email: String,
    /// Age in years (0-150)
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    #[cfg_attr(feature = "openapi", schema(example = 25))]
    pub age: i32,
}

/// User update data transfer object
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    /// New display name
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    /// New email address
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    /// New age
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,
}

impl User {
    /// Case-insensitive substring match against the email address
    pub fn email_contains(&self, needle: &str) -> bool {
        self.email.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl Record for User {
    type Draft = CreateUser;
    type Patch = UpdateUser;

    const KIND: &'static str = ENTITY_USER;

    fn create(id: Uuid, created_at: DateTime<Utc>, draft: CreateUser) -> DomainResult<Self> {
        draft.validate()?;

        Ok(Self {
            id,
            name: draft.name,
            email: draft.email,
            age: draft.age,
            created_at,
        })
    }

    fn merge(&self, patch: &UpdateUser) -> DomainResult<Self> {
        patch.validate()?;

        Ok(Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            age: patch.age.unwrap_or(self.age),
            created_at: self.created_at,
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
