//! Codec module - value-to-diagnostic-text encoding.
//!
//! This module turns host values into the text blocks the transport ships:
//!
//! - [`encode`] - render one [`Value`](crate::value::Value) into a [`Block`]
//! - [`export`] - the recursive structural dump used for array/object contents
//!
//! # Design
//!
//! Encoding is pure and total over the closed variant set. No I/O happens
//! here. Blocks are one-shot buffers: built, written to the transport once,
//! then discarded.

mod block;
pub mod export;

pub use block::{encode, Block};
pub use export::{export, MAX_DEPTH, RECURSION_PLACEHOLDER};
