use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

/// MongoDB connection settings. Credentials are never read from the config
/// file; they come from the `MONGODB_USER`, `MONGODB_PASS` and `MONGODB_HOST`
/// environment variables and all three are mandatory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(skip)]
    pub user: String,
    #[serde(skip)]
    pub pass: String,
    #[serde(skip)]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default = "default_auth_source")]
    pub auth_source: String,
    #[serde(default = "default_selection_timeout")]
    pub server_selection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            pass: String::new(),
            host: String::new(),
            port: default_db_port(),
            name: default_db_name(),
            auth_source: default_auth_source(),
            server_selection_timeout_secs: default_selection_timeout(),
        }
    }
}

fn default_db_port() -> u16 { 27017 }
fn default_db_name() -> String { "microservices".into() }
fn default_auth_source() -> String { "admin".into() }
fn default_selection_timeout() -> u64 { 5 }

/// Load configuration: `config.toml` (or `CONFIG_PATH`) when present,
/// defaults otherwise, then environment overrides and validation.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let mut cfg = match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str::<AppConfig>(&content)?,
        Err(_) => AppConfig::default(),
    };
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        load_default()
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(user) = std::env::var("MONGODB_USER") {
            self.user = user;
        }
        if let Ok(pass) = std::env::var("MONGODB_PASS") {
            self.pass = pass;
        }
        if let Ok(host) = std::env::var("MONGODB_HOST") {
            self.host = host;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() || self.pass.trim().is_empty() || self.host.trim().is_empty() {
            return Err(anyhow!("Set environment MONGODB_USER, MONGODB_PASS, MONGODB_HOST"));
        }
        if self.server_selection_timeout_secs == 0 {
            return Err(anyhow!("database.server_selection_timeout_secs must be a positive integer"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_are_rejected() {
        let cfg = DatabaseConfig::default();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("MONGODB_USER"));
    }

    #[test]
    fn complete_credentials_pass_validation() {
        let cfg = DatabaseConfig {
            user: "svc".into(),
            pass: "secret".into(),
            host: "localhost".into(),
            ..DatabaseConfig::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.port, 27017);
        assert_eq!(cfg.name, "microservices");
        assert_eq!(cfg.auth_source, "admin");
    }

    #[test]
    fn server_defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
    }
}
