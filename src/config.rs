//! Module configuration.
//!
//! Three settings, resolved once at process start and read-only afterwards:
//! collector host, collector port, and the enabled flag. The client receives
//! the resolved [`Config`] at construction; there is no ambient global.
//!
//! # Example
//!
//! ```
//! use varwire::Config;
//!
//! let config = Config::new().host("10.0.0.5").port(9100);
//! assert_eq!(config.endpoint(), "10.0.0.5:9100");
//! ```

use serde::{Deserialize, Serialize};

/// Default collector host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default collector port.
pub const DEFAULT_PORT: u16 = 9001;

/// Environment variable overriding the collector host.
pub const ENV_HOST: &str = "VARWIRE_HOST";

/// Environment variable overriding the collector port.
pub const ENV_PORT: &str = "VARWIRE_PORT";

/// Environment variable switching dispatch on/off.
pub const ENV_ENABLED: &str = "VARWIRE_ENABLED";

/// Resolved module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collector host.
    pub server_host: String,
    /// Collector port.
    pub server_port: u16,
    /// When false, every send short-circuits to a failure-free no-op.
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            enabled: true,
        }
    }
}

impl Config {
    /// Create a configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collector host.
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.server_host = host.into();
        self
    }

    /// Set the collector port.
    pub fn port(mut self, port: u16) -> Self {
        self.server_port = port;
        self
    }

    /// Switch dispatch on or off.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Resolve configuration from the environment, falling back to the
    /// defaults for anything unset or unparsable.
    ///
    /// Reads `VARWIRE_HOST`, `VARWIRE_PORT`, and `VARWIRE_ENABLED`
    /// (`0`/`false`/`off` disable, anything else enables).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var(ENV_HOST) {
            if !host.is_empty() {
                config.server_host = host;
            }
        }

        if let Ok(port) = std::env::var(ENV_PORT) {
            if let Ok(port) = port.parse() {
                config.server_port = port;
            }
        }

        if let Ok(enabled) = std::env::var(ENV_ENABLED) {
            config.enabled = !matches!(
                enabled.to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        config
    }

    /// The collector endpoint as `host:port`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 9001);
        assert!(config.enabled);
    }

    #[test]
    fn test_builder_chain() {
        let config = Config::new().host("collector.local").port(9100).enabled(false);
        assert_eq!(config.server_host, "collector.local");
        assert_eq!(config.server_port, 9100);
        assert!(!config.enabled);
    }

    #[test]
    fn test_endpoint_join() {
        assert_eq!(Config::default().endpoint(), "127.0.0.1:9001");
        assert_eq!(Config::new().host("::1").port(80).endpoint(), "::1:80");
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: Config = serde_json::from_str(r#"{"server_port": 9100}"#).unwrap();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 9100);
        assert!(config.enabled);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = Config::new().host("h").port(1).enabled(false);
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
