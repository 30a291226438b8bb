//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string or file path
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| format!("sqlite:{}/articles.db", default_data_dir())),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn default_data_dir() -> String {
    env::var("DATA_DIR").unwrap_or_else(|_| {
        // Default to ~/.articles-api or current directory
        if let Some(home) = env::var_os("HOME") {
            format!("{}/.articles-api", home.to_string_lossy())
        } else {
            ".articles-api".to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PORT",
            "HOST",
            "DATABASE_URL",
            "DATABASE_MAX_CONNECTIONS",
            "DATA_DIR",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("DATA_DIR", "/tmp/articles-data");

        let config = Config::from_env();
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
        assert_eq!(config.database.url, "sqlite:/tmp/articles-data/articles.db");
        assert_eq!(config.database.max_connections, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("PORT", "9090");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("DATABASE_URL", "sqlite:/srv/blog.db");
        env::set_var("DATABASE_MAX_CONNECTIONS", "12");

        let config = Config::from_env();
        assert_eq!(config.server_addr(), "127.0.0.1:9090");
        assert_eq!(config.database.url, "sqlite:/srv/blog.db");
        assert_eq!(config.database.max_connections, 12);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("DATABASE_MAX_CONNECTIONS", "0");

        let config = Config::from_env();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.max_connections, 5);

        clear_env();
    }
}
