//! # varwire
//!
//! Stream value diagnostics from a host program to a remote collector over
//! TCP.
//!
//! Given a set of [`Value`]s, varwire renders each into a human-readable
//! diagnostic block (type plus contents) and ships the blocks to a listening
//! collector, tolerating connection and send failures without disturbing the
//! host program.
//!
//! ## Architecture
//!
//! - **Value Encoder** (`codec`): pure rendering of a [`Value`] into a
//!   diagnostic text [`Block`](codec::Block).
//! - **Framed Transport** (`protocol` + `transport`): one TCP session per
//!   call; each block travels as a 4-byte Big Endian length prefix followed
//!   by the block text. Connect and write are each bounded at 1 second.
//!
//! ## Example
//!
//! ```ignore
//! use varwire::{Config, Value, VarSend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = VarSend::new(Config::from_env());
//!
//!     let delivered = client
//!         .send(&[
//!             Value::Null,
//!             Value::from(42),
//!             Value::list(vec![Value::from("a"), Value::from("b")]),
//!         ])
//!         .await;
//!
//!     assert!(delivered || !client.config().enabled);
//! }
//! ```

pub mod codec;
pub mod config;
pub mod control;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod value;

mod client;

pub use client::VarSend;
pub use config::Config;
pub use error::{Result, TransportError};
pub use value::{Key, Value};
