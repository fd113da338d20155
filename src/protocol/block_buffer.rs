//! Block buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for zero-copy buffer management.
//! Implements a state machine for handling fragmented frames:
//! - `WaitingForLength`: need at least 4 bytes of prefix
//! - `WaitingForBlock`: prefix parsed, need N more block bytes
//!
//! This is the receiving half of the wire contract: the sender writes
//! length-prefixed blocks, and a collector feeds raw socket reads through
//! [`BlockBuffer::push`] to get whole blocks back out.
//!
//! # Example
//!
//! ```
//! use varwire::protocol::{build_frame, BlockBuffer};
//!
//! let mut buffer = BlockBuffer::new();
//! let blocks = buffer.push(&build_frame(b"Type: integer")).unwrap();
//! assert_eq!(&blocks[0][..], b"Type: integer");
//! ```

use bytes::{Bytes, BytesMut};

use super::wire_format::{decode_len, validate_len, DEFAULT_MAX_BLOCK_SIZE, LEN_PREFIX_SIZE};
use crate::error::Result;

/// State machine for block parsing.
#[derive(Debug, Clone)]
enum State {
    /// Waiting for a complete length prefix (need 4 bytes).
    WaitingForLength,
    /// Prefix parsed, waiting for block bytes.
    WaitingForBlock { remaining: u32 },
}

/// Buffer for accumulating incoming bytes and extracting complete blocks.
///
/// Handles fragmented prefixes, fragmented payloads, and multiple blocks per
/// read. All data is staged in a single `BytesMut` to minimize allocations.
pub struct BlockBuffer {
    /// Accumulated bytes from socket reads.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Maximum accepted block size.
    max_block_size: u32,
}

impl BlockBuffer {
    /// Create a new block buffer with default settings.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(8 * 1024),
            state: State::WaitingForLength,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
        }
    }

    /// Create a new block buffer with a custom max block size.
    pub fn with_max_block_size(max_block_size: u32) -> Self {
        Self {
            buffer: BytesMut::with_capacity(8 * 1024),
            state: State::WaitingForLength,
            max_block_size,
        }
    }

    /// Push data into the buffer and extract all complete blocks.
    ///
    /// Returns the blocks completed by this push (possibly none). Partial
    /// data is kept internally for the next push.
    ///
    /// # Errors
    ///
    /// Returns a protocol error if a prefix claims more than the configured
    /// maximum block size.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Bytes>> {
        self.buffer.extend_from_slice(data);

        let mut blocks = Vec::new();
        while let Some(block) = self.try_extract_one()? {
            blocks.push(block);
        }

        Ok(blocks)
    }

    /// Try to extract a single block from the buffer.
    fn try_extract_one(&mut self) -> Result<Option<Bytes>> {
        match &self.state {
            State::WaitingForLength => {
                let len = match decode_len(&self.buffer) {
                    Some(len) => len,
                    None => return Ok(None),
                };

                validate_len(len, self.max_block_size)?;

                // Consume the prefix bytes.
                let _ = self.buffer.split_to(LEN_PREFIX_SIZE);

                if len == 0 {
                    // Senders skip empty blocks; tolerate the frame anyway.
                    return Ok(Some(Bytes::new()));
                }

                self.state = State::WaitingForBlock { remaining: len };
                self.try_extract_one()
            }

            State::WaitingForBlock { remaining } => {
                let remaining = *remaining as usize;

                if self.buffer.len() < remaining {
                    return Ok(None);
                }

                let block = self.buffer.split_to(remaining).freeze();
                self.state = State::WaitingForLength;

                Ok(Some(block))
            }
        }
    }

    /// Number of buffered bytes not yet assembled into a block.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForLength;
    }

    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match &self.state {
            State::WaitingForLength => "WaitingForLength",
            State::WaitingForBlock { .. } => "WaitingForBlock",
        }
    }
}

impl Default for BlockBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::build_frame;

    #[test]
    fn test_single_complete_block() {
        let mut buffer = BlockBuffer::new();
        let blocks = buffer.push(&build_frame(b"hello")).unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..], b"hello");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_multiple_blocks_in_one_push() {
        let mut buffer = BlockBuffer::new();

        let mut combined = Vec::new();
        combined.extend_from_slice(&build_frame(b"first"));
        combined.extend_from_slice(&build_frame(b"second"));
        combined.extend_from_slice(&build_frame(b"third"));

        let blocks = buffer.push(&combined).unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(&blocks[0][..], b"first");
        assert_eq!(&blocks[1][..], b"second");
        assert_eq!(&blocks[2][..], b"third");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_fragmented_prefix() {
        let mut buffer = BlockBuffer::new();
        let frame = build_frame(b"test");

        // Push only 2 of the 4 prefix bytes.
        let blocks = buffer.push(&frame[..2]).unwrap();
        assert!(blocks.is_empty());
        assert_eq!(buffer.state_name(), "WaitingForLength");

        let blocks = buffer.push(&frame[2..]).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..], b"test");
    }

    #[test]
    fn test_fragmented_block() {
        let mut buffer = BlockBuffer::new();
        let payload = b"a longer diagnostic block that arrives in pieces";
        let frame = build_frame(payload);

        let split = LEN_PREFIX_SIZE + 10;
        let blocks = buffer.push(&frame[..split]).unwrap();
        assert!(blocks.is_empty());
        assert_eq!(buffer.state_name(), "WaitingForBlock");

        let blocks = buffer.push(&frame[split..]).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..], &payload[..]);
    }

    #[test]
    fn test_byte_at_a_time() {
        let mut buffer = BlockBuffer::new();
        let frame = build_frame(b"hi");

        let mut all_blocks = Vec::new();
        for byte in &frame {
            all_blocks.extend(buffer.push(&[*byte]).unwrap());
        }

        assert_eq!(all_blocks.len(), 1);
        assert_eq!(&all_blocks[0][..], b"hi");
    }

    #[test]
    fn test_zero_length_frame_tolerated() {
        let mut buffer = BlockBuffer::new();
        let blocks = buffer.push(&build_frame(b"")).unwrap();

        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_empty());
        assert_eq!(buffer.state_name(), "WaitingForLength");
    }

    #[test]
    fn test_max_block_size_validation() {
        let mut buffer = BlockBuffer::with_max_block_size(100);

        // Prefix claiming 1000 bytes.
        let result = buffer.push(&crate::protocol::encode_len(1000));

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("exceeds maximum"));
    }

    #[test]
    fn test_mixed_complete_and_partial() {
        let mut buffer = BlockBuffer::new();

        let frame1 = build_frame(b"first");
        let frame2 = build_frame(b"second");

        let mut data = frame1.clone();
        data.extend_from_slice(&frame2[..3]);

        let blocks = buffer.push(&data).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..], b"first");

        let blocks = buffer.push(&frame2[3..]).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..], b"second");
    }

    #[test]
    fn test_clear_resets_state() {
        let mut buffer = BlockBuffer::new();
        let frame = build_frame(b"test");

        buffer.push(&frame[..LEN_PREFIX_SIZE + 1]).unwrap();
        assert_eq!(buffer.state_name(), "WaitingForBlock");

        buffer.clear();
        assert_eq!(buffer.state_name(), "WaitingForLength");
        assert!(buffer.is_empty());
    }
}
