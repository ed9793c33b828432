//! HTTP handlers grouped by resource.

pub mod admin_handler;
pub mod item_handler;
pub mod root_handler;
pub mod user_handler;

pub use admin_handler::admin_routes;
pub use item_handler::item_routes;
pub use root_handler::root_routes;
pub use user_handler::user_routes;

use uuid::Uuid;

use common::AppResult;
use domain::{DomainError, DEFAULT_LIMIT};
use record_service_lib::Window;

/// Parse a path identifier; anything that is not a UUID cannot be stored,
/// so it is reported as not found.
pub(crate) fn parse_id(entity: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DomainError::not_found(entity, raw).into())
}

pub(crate) fn default_limit() -> i64 {
    DEFAULT_LIMIT as i64
}

/// Window over already validated, non-negative query bounds
pub(crate) fn window(skip: i64, limit: i64) -> Window {
    Window::new(
        usize::try_from(skip).unwrap_or_default(),
        usize::try_from(limit).unwrap_or_default(),
    )
}
