//! Module info report.
//!
//! A read-only snapshot of the resolved configuration plus the module
//! version, for surfacing in a host's diagnostics page. Renders as a JSON
//! one-liner.
//!
//! # Example
//!
//! ```
//! use varwire::control::{InfoReport, VERSION};
//! use varwire::Config;
//!
//! let report = InfoReport::new(&Config::default());
//! assert_eq!(report.version, VERSION);
//! assert!(report.to_json().contains("9001"));
//! ```

use serde::Serialize;

use crate::config::Config;

/// Module version string.
pub const VERSION: &str = "1.0.0";

/// Read-only report of the module's configuration and version.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    /// Module version.
    pub version: &'static str,
    /// Configured collector host.
    pub server_host: String,
    /// Configured collector port.
    pub server_port: u16,
    /// Whether dispatch is enabled.
    pub enabled: bool,
}

impl InfoReport {
    /// Snapshot the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            version: VERSION,
            server_host: config.server_host.clone(),
            server_port: config.server_port,
            enabled: config.enabled,
        }
    }

    /// Render the report as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("JSON serialization should not fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_snapshots_config() {
        let config = Config::new().host("10.0.0.9").port(9123).enabled(false);
        let report = InfoReport::new(&config);

        assert_eq!(report.version, "1.0.0");
        assert_eq!(report.server_host, "10.0.0.9");
        assert_eq!(report.server_port, 9123);
        assert!(!report.enabled);
    }

    #[test]
    fn test_report_json_fields() {
        let report = InfoReport::new(&Config::default());
        let parsed: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();

        assert_eq!(parsed["version"], "1.0.0");
        assert_eq!(parsed["server_host"], "127.0.0.1");
        assert_eq!(parsed["server_port"], 9001);
        assert_eq!(parsed["enabled"], true);
    }
}
