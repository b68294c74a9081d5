//! # nosj
//!
//! A parser and inspector for the nosj data format.
//!
//! ## What is nosj?
//!
//! nosj is a small JSON-like textual format in which every value announces
//! its own kind with an explicit marker: maps are enclosed in `<` and `>`,
//! integers carry an `i` prefix, simple strings end in a literal `s`, and
//! complex strings use `%XX` percent escapes. A document is a single map of
//! `key:value` entries whose order is significant.
//!
//! ## Key Features
//!
//! - **Order-preserving**: entries iterate and render in the order they
//!   appear in the source, never key-sort order
//! - **All-or-nothing parsing**: the first grammar violation aborts the
//!   whole parse; there is no partial result
//! - **Closed value model**: a parsed tree is maps, 64-bit integers, and
//!   decoded text, nothing else
//! - **Serde interop**: parsed trees implement `Serialize`, so they can be
//!   re-encoded with any serde serializer
//!
//! ## Quick Start
//!
//! ```rust
//! use nosj::{from_str, render};
//!
//! let map = from_str("<name:Alices,age:i30,note:hi%20there>").unwrap();
//!
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(map.get("age").and_then(|v| v.as_i64()), Some(30));
//!
//! print!("{}", render(&map));
//! // begin-map
//! // name -- string -- Alice
//! // age -- integer -- 30
//! // note -- string -- hi there
//! // end-map
//! ```
//!
//! ## Command-line tool
//!
//! The crate ships a `nosj` binary that reads a document from a file and
//! prints the rendering above. Any failure (missing argument, unreadable
//! file, malformed document) prints a single `ERROR -- ...` line to stderr
//! and exits with code 66.
//!
//! ## Format Specification
//!
//! See the [`spec`] module for the full grammar, including the structural
//! limitation on nested maps with multiple entries.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod render;
pub mod spec;
pub mod value;

pub use de::from_str;
pub use error::{to_exit_code, Error, Result, EXIT_INPUT_ERROR};
pub use map::NosjMap;
pub use render::render;
pub use value::Value;

use std::io;
use std::path::Path;

/// Parses a nosj document from bytes.
///
/// # Examples
///
/// ```rust
/// use nosj::from_slice;
///
/// let map = from_slice(b"<x:i1>").unwrap();
/// assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(1));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not a valid nosj
/// document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<NosjMap> {
    let s = std::str::from_utf8(v).map_err(|e| Error::format(e.to_string()))?;
    from_str(s)
}

/// Parses a nosj document from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails or the content is not a valid nosj
/// document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<NosjMap> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| Error::io(e.to_string()))?;
    from_str(&content)
}

/// Parses a nosj document from a file.
///
/// This is the entry point the command-line tool uses.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, or
/// [`Error::Format`] if its content is not a valid nosj document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<NosjMap> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(e.to_string()))?;
    from_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let map = from_str("<greeting:hellos,count:i2>").unwrap();
        assert_eq!(
            render(&map),
            "begin-map\n\
             greeting -- string -- hello\n\
             count -- integer -- 2\n\
             end-map\n"
        );
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(matches!(from_slice(b"<a:\xffs>"), Err(Error::Format(_))));
    }

    #[test]
    fn test_from_reader() {
        let cursor = std::io::Cursor::new(b"<x:i-9>");
        let map = from_reader(cursor).unwrap();
        assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(-9));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = from_path("definitely/not/a/real/file.nosj").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
