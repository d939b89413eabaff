//! Layered configuration for the registry server.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8460".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://pixelfarm.db?mode=rwc".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub enable_docs: bool,
    pub cors_enabled: bool,
}

impl AppConfig {
    /// Layered config: defaults -> YAML (if provided) -> env (`PIXELFARM__*`).
    ///
    /// # Errors
    ///
    /// Returns an error when the YAML file cannot be parsed or a value has
    /// the wrong shape.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment = figment.merge(Env::prefixed("PIXELFARM__").split("__"));
        Ok(figment.extract()?)
    }

    /// CLI flags win over every other layer.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            if let Ok(mut addr) = self.server.bind_addr.parse::<SocketAddr>() {
                addr.set_port(port);
                self.server.bind_addr = addr.to_string();
            }
        }
    }

    /// Pretty-printed effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8460");
        assert!(config.database.dsn.starts_with("sqlite://"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.api.enable_docs);
    }

    #[test]
    fn test_yaml_layer_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  bind_addr: \"0.0.0.0:9000\"\nlogging:\n  level: debug"
        )
        .unwrap();

        let config = AppConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.logging.level, "debug");
        // untouched sections keep their defaults
        assert!(config.database.dsn.starts_with("sqlite://"));
    }

    #[test]
    fn test_unknown_yaml_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  bind_address: \"0.0.0.0:9000\"").unwrap();

        assert!(AppConfig::load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn test_port_override_rewrites_bind_addr() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(Some(9999));
        assert_eq!(config.server.bind_addr, "127.0.0.1:9999");
    }

    #[test]
    fn test_port_override_absent_keeps_bind_addr() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(None);
        assert_eq!(config.server.bind_addr, "127.0.0.1:8460");
    }
}
