//! Client configuration.

use serde::{Deserialize, Serialize};

/// Public Rick and Morty GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// Settings for [`CharacterClient`](crate::CharacterClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl ClientConfig {
    /// Create a config for a specific endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Config baked in at compile time.
    ///
    /// `RICKDEX_GRAPHQL_ENDPOINT` overrides the default endpoint when set
    /// during the build; the browser has no runtime environment to read.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("RICKDEX_GRAPHQL_ENDPOINT"))
    }

    fn resolve(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => Self::new(endpoint),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ClientConfig::default().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_resolve_override() {
        let config = ClientConfig::resolve(Some("http://localhost:8080/graphql"));
        assert_eq!(config.endpoint, "http://localhost:8080/graphql");
    }

    #[test]
    fn test_resolve_blank_override_falls_back() {
        assert_eq!(ClientConfig::resolve(Some("  ")), ClientConfig::default());
        assert_eq!(ClientConfig::resolve(None), ClientConfig::default());
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
