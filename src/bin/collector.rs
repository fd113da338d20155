//! varwire collector - receives framed diagnostic blocks and prints them.
//!
//! Listens on the configured endpoint, reassembles length-prefixed blocks
//! with [`BlockBuffer`], and echoes each block to stdout under a banner
//! naming the sending peer. One connection is served at a time, in arrival
//! order.
//!
//! # Usage
//!
//! ```text
//! VARWIRE_HOST=0.0.0.0 VARWIRE_PORT=9001 cargo run --bin varwire-collector
//! ```

use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};

use varwire::config::Config;
use varwire::protocol::BlockBuffer;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let endpoint = config.endpoint();

    let listener = TcpListener::bind(&endpoint).await?;
    tracing::info!("varwire collector listening on {}", endpoint);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::warn!("accept failed: {}", err);
                continue;
            }
        };

        tracing::info!("connection from {}", peer);
        if let Err(err) = serve_connection(stream, &peer.to_string()).await {
            tracing::warn!("connection from {} ended with error: {}", peer, err);
        }
    }
}

/// Drain one sender: read until EOF, printing each completed block.
async fn serve_connection(mut stream: TcpStream, peer: &str) -> std::io::Result<()> {
    let mut buffer = BlockBuffer::new();
    let mut read_buf = vec![0u8; 8 * 1024];
    let mut block_count = 0usize;

    loop {
        let n = stream.read(&mut read_buf).await?;
        if n == 0 {
            break;
        }

        let blocks = match buffer.push(&read_buf[..n]) {
            Ok(blocks) => blocks,
            Err(err) => {
                // Corrupt prefix; drop the rest of this stream.
                tracing::warn!("bad frame from {}: {}", peer, err);
                break;
            }
        };

        for block in blocks {
            block_count += 1;
            println!("===== VAR_SEND #{} FROM {} =====", block_count, peer);
            println!("{}", String::from_utf8_lossy(&block).trim_end());
            println!("=====");
        }
    }

    if !buffer.is_empty() {
        tracing::warn!(
            "connection from {} closed with {} unframed bytes pending",
            peer,
            buffer.len()
        );
    }

    tracing::info!("{} sent {} blocks", peer, block_count);
    Ok(())
}
