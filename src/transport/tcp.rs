//! TCP session for delivering diagnostic blocks.
//!
//! One session per call: connect, write blocks in order, close. Connect and
//! every write are bounded by [`IO_TIMEOUT`]; a timeout fails the call the
//! same way any other I/O error does. There is no retry, no pooling, and no
//! acknowledgement from the collector.
//!
//! The socket is released on every exit path: the stream closes when the
//! session drops, whether the call succeeded or bailed out mid-sequence.
//!
//! # Example
//!
//! ```ignore
//! use varwire::transport::Session;
//!
//! let mut session = Session::connect("127.0.0.1:9001").await?;
//! session.send_block(&block).await?;
//! session.shutdown().await;
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::{lookup_host, TcpSocket, TcpStream};
use tokio::time::timeout;

use crate::codec::Block;
use crate::error::{Result, TransportError, WriteStage};
use crate::protocol::encode_len;

/// Bound on each blocking point (connect and every write).
pub const IO_TIMEOUT: Duration = Duration::from_secs(1);

/// A connected transport session.
///
/// Owns the socket exclusively for the duration of one call.
pub struct Session {
    stream: TcpStream,
    endpoint: String,
}

impl Session {
    /// Open a TCP connection to `endpoint` (`host:port`) under [`IO_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// - [`TransportError::Socket`] if the socket could not be created
    /// - [`TransportError::Connect`] if resolution or the handshake failed
    /// - [`TransportError::ConnectTimeout`] if the handshake exceeded the bound
    pub async fn connect(endpoint: &str) -> Result<Self> {
        // Resolution counts against the connect bound as well.
        let addr = match timeout(IO_TIMEOUT, resolve(endpoint)).await {
            Err(_) => {
                return Err(TransportError::ConnectTimeout {
                    endpoint: endpoint.to_string(),
                })
            }
            Ok(resolved) => resolved?,
        };

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(TransportError::Socket)?;

        let stream = match timeout(IO_TIMEOUT, socket.connect(addr)).await {
            Err(_) => {
                return Err(TransportError::ConnectTimeout {
                    endpoint: endpoint.to_string(),
                })
            }
            Ok(Err(source)) => {
                return Err(TransportError::Connect {
                    endpoint: endpoint.to_string(),
                    source,
                })
            }
            Ok(Ok(stream)) => stream,
        };

        Ok(Self {
            stream,
            endpoint: endpoint.to_string(),
        })
    }

    /// The endpoint this session is connected to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one block as a length-prefixed frame.
    ///
    /// Zero-length blocks are skipped entirely: no prefix, no bytes. The
    /// prefix and the payload are staged writes so a failure names the piece
    /// that failed; a block is never left partially accepted without the
    /// call failing.
    pub async fn send_block(&mut self, block: &Block) -> Result<()> {
        if block.is_empty() {
            return Ok(());
        }

        let len = u32::try_from(block.len()).map_err(|_| {
            TransportError::Protocol(format!("Block size {} exceeds u32 range", block.len()))
        })?;

        self.write_stage(&encode_len(len), WriteStage::LengthPrefix)
            .await?;
        self.write_stage(block.as_bytes(), WriteStage::Payload)
            .await
    }

    /// Write one frame piece under the write bound.
    async fn write_stage(&mut self, bytes: &[u8], stage: WriteStage) -> Result<()> {
        match timeout(IO_TIMEOUT, self.stream.write_all(bytes)).await {
            Err(_) => Err(TransportError::WriteTimeout { stage }),
            Ok(Err(source)) => Err(TransportError::Write { stage, source }),
            Ok(Ok(())) => Ok(()),
        }
    }

    /// Flush and close the connection.
    ///
    /// Errors here are ignored: every block was already accepted, and the
    /// socket closes on drop regardless.
    pub async fn shutdown(mut self) {
        let _ = self.stream.shutdown().await;
    }
}

/// Resolve `host:port` to the first usable address.
async fn resolve(endpoint: &str) -> Result<SocketAddr> {
    let mut addrs = lookup_host(endpoint)
        .await
        .map_err(|source| TransportError::Connect {
            endpoint: endpoint.to_string(),
            source,
        })?;

    addrs.next().ok_or_else(|| TransportError::Connect {
        endpoint: endpoint.to_string(),
        source: std::io::Error::new(
            std::io::ErrorKind::AddrNotAvailable,
            "endpoint resolved to no addresses",
        ),
    })
}
