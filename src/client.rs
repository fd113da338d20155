//! Host-facing send surface.
//!
//! [`VarSend`] is what a host program embeds: give it a resolved [`Config`]
//! once, then call [`send`](VarSend::send) with whatever values need
//! inspecting. Delivery is best-effort telemetry. A failure is reported as
//! `false` (and a warning), never as a panic or a propagated error, so the
//! host's own control flow is never interrupted.
//!
//! # Example
//!
//! ```ignore
//! use varwire::{Config, Value, VarSend};
//!
//! let client = VarSend::new(Config::from_env());
//! let delivered = client.send(&[Value::from(42), Value::from("state")]).await;
//! ```

use crate::codec;
use crate::config::Config;
use crate::error::{Result, TransportError};
use crate::transport::Session;
use crate::value::Value;

/// Client for sending value diagnostics to the configured collector.
///
/// Cheap to construct; each call opens and closes its own TCP session, so a
/// single instance can be shared freely.
#[derive(Debug, Clone)]
pub struct VarSend {
    config: Config,
}

impl VarSend {
    /// Create a client from a resolved configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send one diagnostic block per value, in order.
    ///
    /// Returns `true` only if every block was accepted by the transport.
    /// Returns `false` without touching the network when dispatch is
    /// disabled or `values` is empty. Transport failures are logged at
    /// warning level, naming the failing stage.
    pub async fn send(&self, values: &[Value]) -> bool {
        match self.try_send(values).await {
            Ok(()) => true,
            Err(TransportError::Disabled) => false,
            Err(err) => {
                tracing::warn!("var_send failed: {}", err);
                false
            }
        }
    }

    /// Send with the full error taxonomy surfaced.
    ///
    /// Connects once, then encodes and writes each value's block in input
    /// order. The first failure aborts the remaining sequence; blocks not
    /// yet written are dropped, not queued.
    pub async fn try_send(&self, values: &[Value]) -> Result<()> {
        if !self.config.enabled {
            return Err(TransportError::Disabled);
        }
        if values.is_empty() {
            return Err(TransportError::NoValues);
        }

        let endpoint = self.config.endpoint();
        let mut session = Session::connect(&endpoint).await?;

        for (i, value) in values.iter().enumerate() {
            let block = codec::encode(value, i + 1);
            tracing::debug!(
                index = i + 1,
                variant = value.type_label(),
                bytes = block.len(),
                "sending diagnostic block"
            );
            session.send_block(&block).await?;
        }

        session.shutdown().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_short_circuits() {
        let client = VarSend::new(Config::new().enabled(false));

        let result = client.try_send(&[Value::Null]).await;
        assert!(matches!(result, Err(TransportError::Disabled)));

        // The boolean surface reports false, quietly.
        assert!(!client.send(&[Value::Null]).await);
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let client = VarSend::new(Config::default());
        let result = client.try_send(&[]).await;
        assert!(matches!(result, Err(TransportError::NoValues)));
    }

    #[tokio::test]
    async fn test_disabled_beats_empty_input() {
        // Disabled short-circuits before any argument checking.
        let client = VarSend::new(Config::new().enabled(false));
        let result = client.try_send(&[]).await;
        assert!(matches!(result, Err(TransportError::Disabled)));
    }

    #[tokio::test]
    async fn test_send_reports_false_on_connect_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = VarSend::new(Config::new().port(port));
        assert!(!client.send(&[Value::from(1)]).await);
    }
}
