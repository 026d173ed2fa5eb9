use serde::Deserialize;

/// Configuration options for the gateway server.
///
/// Loaded from `config/default.yaml`, an optional `config/{APP_ENV}.yaml`
/// and `APP__*` environment overrides.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Where and how the provider is called. The credential is not part of this
/// struct; it comes from the environment only.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Ceiling for one provider round trip.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"port": 9000, "provider": {"model": "gemini-pro"}}"#)
                .unwrap();

        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.provider.model, "gemini-pro");
        assert_eq!(config.provider.timeout_secs, 30);
    }
}
