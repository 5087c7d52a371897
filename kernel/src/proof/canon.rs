//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! Every digest in the workspace (snapshot histories, run summaries, graph
//! fingerprints) is computed over bytes produced here.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Strings are JSON-escaped per RFC 8259 §7.
//! 4. Numbers must be integers (`i64` or `u64`). Floats are rejected so that
//!    formatting can never drift between platforms.
//! 5. `null`, `true`, `false` are written literally.

use std::io::Write;

use thiserror::Error;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    emit(&mut out, value)?;
    Ok(out)
}

fn emit(out: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;

    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => emit_number(out, n)?,
        Value::String(s) => emit_string(out, s),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit(out, item)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit_string(out, key);
                out.push(b':');
                emit(out, item)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

fn emit_number(out: &mut Vec<u8>, n: &serde_json::Number) -> Result<(), CanonError> {
    if let Some(i) = n.as_i64() {
        let _ = write!(out, "{i}");
    } else if let Some(u) = n.as_u64() {
        let _ = write!(out, "{u}");
    } else {
        return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
    }
    Ok(())
}

fn emit_string(out: &mut Vec<u8>, s: &str) {
    out.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => {
                let mut utf8 = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    out.push(b'"');
}
