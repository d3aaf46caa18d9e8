use serde::{Deserialize, Serialize};
use std::env;

/// Process configuration, assembled once at startup and injected into the
/// application state. Nothing here is a global singleton so tests can build
/// their own fixtures without touching the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, auto-created on first run.
    pub path: String,
    pub max_connections: u32,
}

/// The single admin identity: one username/password pair and one opaque
/// token, valid for the process lifetime. No sessions, no expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(v) = env::var("MENU_API_PORT").ok().or_else(|| env::var("PORT").ok()) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Ok(v) = env::var("MENU_DB") {
            self.database.path = v;
        }
        if let Ok(v) = env::var("MENU_DB_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }

        // Admin identity overrides
        if let Ok(v) = env::var("MENU_ADMIN_USERNAME") {
            self.admin.username = v;
        }
        if let Ok(v) = env::var("MENU_ADMIN_PASSWORD") {
            self.admin.password = v;
        }
        if let Ok(v) = env::var("MENU_ADMIN_TOKEN") {
            self.admin.token = v;
        }

        self
    }

    /// Defaults matching the reference deployment. The admin credentials are
    /// placeholders meant to be overridden via MENU_ADMIN_* in any real
    /// installation.
    pub fn defaults() -> Self {
        Self {
            server: ServerConfig { port: 3001 },
            database: DatabaseConfig {
                path: "menu.db".to_string(),
                max_connections: 5,
            },
            admin: AdminConfig {
                username: "admin".to_string(),
                password: "123".to_string(),
                token: "secret-admin-token-12345".to_string(),
            },
        }
    }
}
