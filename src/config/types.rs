use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub downstream: DownstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity advertised to MCP clients during the handshake
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "refundpy".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DownstreamConfig {
    pub base_url: String,
    /// No timeout unless set
    pub request_timeout_secs: Option<u64>,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_refund_api() {
        let config = BridgeConfig::default();
        assert_eq!(config.downstream.base_url, "http://localhost:5000/");
        assert!(config.downstream.request_timeout_secs.is_none());
        assert_eq!(config.server.name, "refundpy");
        assert_eq!(config.server.version, "1.0.0");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: DownstreamConfig =
            serde_json::from_value(serde_json::json!({ "request_timeout_secs": 5 })).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, Some(5));
    }
}
