//! JSON written to stdout.
//!
//! The output matches what Python's `json.dumps` produces with default
//! settings, byte for byte: `", "` between items, `": "` after keys, and
//! every character outside printable ASCII escaped as `\uXXXX` (surrogate
//! pairs above the BMP). Consumers that compare or hash the output get the
//! same bytes from either producer.

use std::io;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::{Chunk, Result};

/// Message reported when no PDF path was given.
pub const MISSING_PATH: &str = "Missing pdf path";

/// `{"chunks": [...]}`
#[derive(Debug, Serialize)]
pub struct ChunksOutput<'a> {
    /// Every chunk of the file, in output order.
    pub chunks: &'a [Chunk],
}

/// `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorOutput<'a> {
    /// Human-readable reason.
    pub error: &'a str,
}

/// [`Formatter`] with `json.dumps` separators and ASCII-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` the way `json.dumps` would.
///
/// ```rust
/// use pdfslabs::output::{to_json, ErrorOutput, MISSING_PATH};
///
/// let json = to_json(&ErrorOutput { error: MISSING_PATH }).unwrap();
/// assert_eq!(json, r#"{"error": "Missing pdf path"}"#);
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `value` fails to serialize.
pub fn to_json<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PythonFormatter);
    value.serialize(&mut serializer)?;
    let json = String::from_utf8(buf).map_err(serde_json::Error::custom)?;
    Ok(json)
}
