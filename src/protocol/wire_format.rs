//! Wire format encoding and decoding.
//!
//! Each diagnostic block travels as one length-prefixed frame:
//! ```text
//! ┌────────────┬─────────────────────┐
//! │ Length     │ Block text          │
//! │ 4 bytes    │ exactly N bytes     │
//! │ uint32 BE  │ UTF-8               │
//! └────────────┴─────────────────────┘
//! ```
//!
//! The length is Big Endian. There is no handshake, acknowledgement, or
//! version field; the receiver reads the prefix, then reads exactly that
//! many bytes, for every block.

use crate::error::{Result, TransportError};

/// Length prefix size in bytes (fixed, exactly 4).
pub const LEN_PREFIX_SIZE: usize = 4;

/// Default maximum block size accepted by a receiver (16 MB).
///
/// Diagnostic blocks are short; a prefix claiming more than this is treated
/// as a corrupt stream rather than an allocation request.
pub const DEFAULT_MAX_BLOCK_SIZE: u32 = 16 * 1024 * 1024;

/// Encode a block length as a Big Endian prefix.
///
/// # Example
///
/// ```
/// use varwire::protocol::encode_len;
///
/// assert_eq!(encode_len(0x0102), [0, 0, 0x01, 0x02]);
/// ```
#[inline]
pub fn encode_len(len: u32) -> [u8; LEN_PREFIX_SIZE] {
    len.to_be_bytes()
}

/// Decode a Big Endian length prefix.
///
/// Returns `None` if the buffer is too short.
#[inline]
pub fn decode_len(buf: &[u8]) -> Option<u32> {
    if buf.len() < LEN_PREFIX_SIZE {
        return None;
    }
    Some(u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]))
}

/// Validate a decoded length against a receiver's size bound.
pub fn validate_len(len: u32, max_block_size: u32) -> Result<()> {
    if len > max_block_size {
        return Err(TransportError::Protocol(format!(
            "Block size {} exceeds maximum {}",
            len, max_block_size
        )));
    }
    Ok(())
}

/// Build a complete frame as a single byte vector.
///
/// Prepends the Big Endian length prefix to the block bytes. Used by the
/// receiver-side tests; the sending path writes prefix and payload as two
/// staged writes so failures can name the piece that failed.
pub fn build_frame(block: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(LEN_PREFIX_SIZE + block.len());
    buf.extend_from_slice(&encode_len(block.len() as u32));
    buf.extend_from_slice(block);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_encode_decode_roundtrip() {
        for len in [0u32, 1, 255, 4096, u32::MAX] {
            let encoded = encode_len(len);
            assert_eq!(decode_len(&encoded), Some(len));
        }
    }

    #[test]
    fn test_len_big_endian_byte_order() {
        let bytes = encode_len(0x0102_0304);
        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_decode_too_short_buffer() {
        assert_eq!(decode_len(&[0, 0, 0]), None);
        assert_eq!(decode_len(&[]), None);
    }

    #[test]
    fn test_validate_len() {
        assert!(validate_len(100, 1000).is_ok());
        assert!(validate_len(1000, 1000).is_ok());

        let err = validate_len(1001, 1000).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_build_frame() {
        let frame = build_frame(b"hello");
        assert_eq!(frame.len(), LEN_PREFIX_SIZE + 5);
        assert_eq!(decode_len(&frame), Some(5));
        assert_eq!(&frame[LEN_PREFIX_SIZE..], b"hello");
    }

    #[test]
    fn test_build_frame_empty_payload() {
        let frame = build_frame(b"");
        assert_eq!(frame.len(), LEN_PREFIX_SIZE);
        assert_eq!(decode_len(&frame), Some(0));
    }
}
