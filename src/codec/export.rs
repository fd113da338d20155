//! Recursive structural dump for composite values.
//!
//! Renders a [`Value`] as a re-evaluable expression: arrays as
//! `array('key' => value, ...)`, objects as
//! `\Class::__set_state(array(...))`, strings single-quoted, numbers bare.
//! Nesting is bounded by [`MAX_DEPTH`]; past the bound the dump emits
//! [`RECURSION_PLACEHOLDER`] and stops descending, so rendering always
//! terminates.
//!
//! # Example
//!
//! ```
//! use varwire::codec::export;
//! use varwire::value::{Key, Value};
//!
//! let v = Value::Array(vec![
//!     (Key::from("a"), Value::from(1)),
//!     (Key::from(0), Value::from("two")),
//! ]);
//! assert_eq!(export(&v), "array('a' => 1, 0 => 'two')");
//! ```

use std::fmt::Write;

use crate::value::{Key, Value};

/// Maximum nesting depth of the structural dump.
pub const MAX_DEPTH: usize = 32;

/// Placeholder emitted where the depth bound cuts the dump off.
pub const RECURSION_PLACEHOLDER: &str = "*RECURSION*";

/// Render a value as a re-evaluable expression string.
pub fn export(value: &Value) -> String {
    let mut out = String::new();
    export_into(&mut out, value, 0);
    out
}

fn export_into(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::Float(f) => push_float(out, *f),
        Value::Str(s) => push_quoted(out, s),
        Value::Array(entries) => {
            if depth >= MAX_DEPTH {
                out.push_str(RECURSION_PLACEHOLDER);
                return;
            }
            out.push_str("array(");
            for (i, (key, val)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                push_key(out, key);
                out.push_str(" => ");
                export_into(out, val, depth + 1);
            }
            out.push(')');
        }
        Value::Object { class, members } => {
            if depth >= MAX_DEPTH {
                out.push_str(RECURSION_PLACEHOLDER);
                return;
            }
            let _ = write!(out, "\\{}::__set_state(array(", class);
            for (i, (name, val)) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                push_quoted(out, name);
                out.push_str(" => ");
                export_into(out, val, depth + 1);
            }
            out.push_str("))");
        }
        Value::Resource { handle, .. } => {
            // Handles are opaque; the dump carries just the ID.
            let _ = write!(out, "resource(#{})", handle);
        }
    }
}

fn push_key(out: &mut String, key: &Key) {
    match key {
        Key::Int(n) => {
            let _ = write!(out, "{}", n);
        }
        Key::Str(s) => push_quoted(out, s),
    }
}

/// Single-quote a string, escaping backslashes and quotes.
fn push_quoted(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            other => out.push(other),
        }
    }
    out.push('\'');
}

/// Float in a locale-independent, re-evaluable form: integral values keep a
/// trailing `.0` so they read back as floats.
fn push_float(out: &mut String, f: f64) {
    if f.is_nan() {
        out.push_str("NAN");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "INF" } else { "-INF" });
    } else if f.fract() == 0.0 && f.abs() < 1e16 {
        let _ = write!(out, "{:.1}", f);
    } else {
        let _ = write!(out, "{}", f);
    }
}
