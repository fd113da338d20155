//! Transport module - TCP delivery of diagnostic blocks.
//!
//! One [`Session`] per call, bounded blocking on connect and write, socket
//! released on every exit path.

mod tcp;

pub use tcp::{Session, IO_TIMEOUT};
