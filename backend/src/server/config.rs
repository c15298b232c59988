//! Server settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener configuration, layered from defaults, file, and environment
/// (`ITEMS_API_HOST`, `ITEMS_API_PORT`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ITEMS_API")]
pub struct ServerSettings {
    /// Interface to bind; all interfaces when unset.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8000)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured bind host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}
