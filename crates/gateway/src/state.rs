//! Application state for dependency injection.

use std::sync::Arc;

use record_service_lib::{AdminService, ItemService, Services, UserService};

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub items: Arc<dyn ItemService>,
    pub admin: Arc<dyn AdminService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(services: &Services, config: GatewayConfig) -> Self {
        Self {
            users: services.users(),
            items: services.items(),
            admin: services.admin(),
            config,
        }
    }
}
