//! Error types for varwire.

use std::fmt;

use thiserror::Error;

/// Which part of a frame was being sent when a write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    /// The 4-byte big-endian length prefix.
    LengthPrefix,
    /// The block payload bytes.
    Payload,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStage::LengthPrefix => f.write_str("length prefix"),
            WriteStage::Payload => f.write_str("block payload"),
        }
    }
}

/// Main error type for transport operations.
///
/// Every variant is handled locally by the caller: the session is torn down,
/// a warning is emitted, and the host program keeps running.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Underlying socket could not be created.
    #[error("could not create socket: {0}")]
    Socket(#[source] std::io::Error),

    /// TCP connect to the collector failed.
    #[error("connect failed to {endpoint}: {source}")]
    Connect {
        /// Target `host:port`.
        endpoint: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TCP connect did not complete within the configured bound.
    #[error("connect timed out to {endpoint}")]
    ConnectTimeout {
        /// Target `host:port`.
        endpoint: String,
    },

    /// A send of a frame piece failed.
    #[error("send failed for {stage}: {source}")]
    Write {
        /// Which piece of the frame was being written.
        stage: WriteStage,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A send did not complete within the configured bound.
    #[error("send timed out for {stage}")]
    WriteTimeout {
        /// Which piece of the frame was being written.
        stage: WriteStage,
    },

    /// Protocol violation on the receiving side (bad or oversized prefix).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Dispatch is switched off in the configuration. Not a true failure:
    /// the call short-circuits without touching the network.
    #[error("var_send is disabled")]
    Disabled,

    /// The call carried no values; at least one is required.
    #[error("at least one value is required")]
    NoValues,
}

/// Result type alias using TransportError.
pub type Result<T> = std::result::Result<T, TransportError>;
