//! Diagnostic block rendering.
//!
//! [`encode`] turns one [`Value`] into a [`Block`]: a header line, a type
//! line, and a value or contents line. Rendering is total over the variant
//! set, so it never fails, and it performs no I/O. The block is handed to
//! the transport as-is and discarded afterwards.
//!
//! # Example
//!
//! ```
//! use varwire::codec::encode;
//! use varwire::value::Value;
//!
//! let block = encode(&Value::from(42), 2);
//! assert!(block.as_str().contains("--- Variable #2 ---"));
//! assert!(block.as_str().contains("Type: integer"));
//! assert!(block.as_str().contains("Value: 42"));
//! ```

use std::fmt::Write;

use crate::value::Value;

use super::export::export;

/// Rendered diagnostic text for one value.
///
/// Immutable once built. Always non-empty: the header line alone guarantees
/// content, so a block is never framed as a zero-length message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    text: String,
}

impl Block {
    /// The rendered text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The rendered text as bytes (UTF-8).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the block carries no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the block, returning the text.
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Render one value into a diagnostic block. `index` is 1-based.
pub fn encode(value: &Value, index: usize) -> Block {
    let mut text = String::with_capacity(64);

    let _ = write!(text, "\n--- Variable #{} ---\n", index);
    let _ = writeln!(text, "Type: {}", value.type_label());

    match value {
        Value::Array(entries) => {
            let _ = writeln!(text, "Array with {} elements", entries.len());
            text.push_str("Array contents: ");
            text.push_str(&export(value));
            text.push('\n');
        }
        Value::Object { class, .. } => {
            let _ = writeln!(text, "Object of class '{}'", class);
            text.push_str("Object contents: ");
            text.push_str(&export(value));
            text.push('\n');
        }
        Value::Resource { handle, kind } => {
            let _ = writeln!(
                text,
                "Resource ID #{} of type {}",
                handle,
                kind.as_deref().unwrap_or("unknown")
            );
        }
        scalar => {
            // canonical_string is Some for every remaining variant
            let rendered = scalar.canonical_string().unwrap_or_default();
            let _ = writeln!(text, "Value: {}", rendered);
        }
    }

    Block { text }
}
