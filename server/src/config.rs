//! Server configuration.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using `ConfigError`.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting is present but unusable.
    #[error("Configuration error: {0}")]
    Invalid(String),

    /// Config crate error (missing file, bad syntax, type mismatch).
    #[error("Config crate error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Settings of the static file server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on.
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,

    /// Directory with the built site (index.html, pkg/).
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            site_root: default_site_root(),
        }
    }
}

impl ServerConfig {
    /// Load from an optional TOML file, then `RICKDEX__*` environment
    /// variables (e.g. `RICKDEX__ADDR`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("RICKDEX").separator("__"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, addr: Option<SocketAddr>, site_root: Option<PathBuf>) -> Self {
        if let Some(addr) = addr {
            self.addr = addr;
        }
        if let Some(site_root) = site_root {
            self.site_root = site_root;
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "site_root cannot be empty".to_string(),
            ));
        }

        if !self.site_root.exists() {
            tracing::warn!(
                "site root {} does not exist yet; build the frontend first",
                self.site_root.display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("rickdex.toml");
        std::fs::write(
            &config_path,
            r#"
addr = "0.0.0.0:8080"
site_root = "dist"
"#,
        )
        .expect("write");

        let config = ServerConfig::load(Some(&config_path)).expect("load config");

        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.site_root, PathBuf::from("dist"));
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("rickdex.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = ServerConfig::load(Some(&config_path)).expect("load config");

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.port(), 3000);
    }

    #[test]
    fn test_missing_config_file() {
        let result = ServerConfig::load(Some(Path::new("/nonexistent/rickdex.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_addr() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("rickdex.toml");
        std::fs::write(&config_path, "addr = \"not an address\"\n").expect("write");

        assert!(ServerConfig::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_empty_site_root_rejected() {
        let config = ServerConfig::default().with_overrides(None, Some(PathBuf::new()));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site_root cannot be empty"));
    }

    #[test]
    fn test_overrides() {
        let addr: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        let config = ServerConfig::default().with_overrides(Some(addr), None);

        assert_eq!(config.addr, addr);
        assert_eq!(config.site_root, default_site_root());
    }
}
