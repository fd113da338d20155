//! Protocol module - wire format and framing.
//!
//! This module implements the framed wire contract for diagnostic blocks:
//! - 4-byte Big Endian length prefix encoding/decoding
//! - Block buffer for reassembling frames from partial reads

mod block_buffer;
mod wire_format;

pub use block_buffer::BlockBuffer;
pub use wire_format::{
    build_frame, decode_len, encode_len, validate_len, DEFAULT_MAX_BLOCK_SIZE, LEN_PREFIX_SIZE,
};
