//! Gateway configuration.

use common::ServiceConfig;

/// Path of the Swagger UI
pub const DOCS_PATH: &str = "/docs";

/// Path of the ReDoc page
pub const REDOC_PATH: &str = "/redoc";

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address, service name and log level
    pub server: ServiceConfig,
    /// Version reported by the root endpoint
    pub version: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> String {
        format!("{},tower_http=debug", self.server.log_level)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig::default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
