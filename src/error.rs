//! Error types for nosj parsing.
//!
//! Every failure the crate can produce is one of three kinds, matching the
//! three ways the tool can fail overall:
//!
//! - **Usage**: no input filename was supplied (or the arguments were
//!   otherwise unusable)
//! - **Io**: the input file could not be opened or read
//! - **Format**: the document violates the nosj grammar anywhere, including
//!   inside nested maps
//!
//! A parse either fully succeeds or fully fails: the first grammar violation
//! encountered aborts the whole parse, and no partial tree is ever returned.
//! The kinds are distinguished only by message text; the command-line tool
//! maps every one of them to the same exit code (see [`to_exit_code`]).
//!
//! ## Examples
//!
//! ```rust
//! use nosj::{from_str, Error};
//!
//! let result = from_str("<key:notavalue>");
//! assert!(matches!(result, Err(Error::Format(_))));
//! ```

use thiserror::Error;

/// Exit code used for every failure: sysexits `EX_NOINPUT`.
pub const EXIT_INPUT_ERROR: i32 = 66;

/// Represents all possible errors that can occur while loading and parsing
/// a nosj document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Command line was missing the input filename or otherwise unusable.
    #[error("{0}")]
    Usage(String),

    /// The input file could not be opened or read.
    #[error("failed to read file: {0}")]
    Io(String),

    /// The document violates the nosj grammar.
    #[error("malformed document: {0}")]
    Format(String),
}

impl Error {
    /// Creates a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }

    /// Creates an I/O error for file reading failures.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates a format error for grammar violations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nosj::Error;
    ///
    /// let err = Error::format("key `a!` is not alphanumeric");
    /// assert!(err.to_string().contains("malformed document"));
    /// ```
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}

/// Maps an error to the process exit code.
///
/// All error kinds terminate the process identically; they differ only in
/// the message printed to stderr.
#[must_use]
pub fn to_exit_code(_err: &Error) -> i32 {
    EXIT_INPUT_ERROR
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_share_exit_code() {
        assert_eq!(to_exit_code(&Error::usage("no input filename provided")), 66);
        assert_eq!(to_exit_code(&Error::io("no such file")), 66);
        assert_eq!(to_exit_code(&Error::format("bad delimiter")), 66);
    }

    #[test]
    fn test_messages_are_distinguishable() {
        let io = Error::io("no such file");
        let format = Error::format("bad delimiter");
        assert_ne!(io.to_string(), format.to_string());
        assert!(format.to_string().starts_with("malformed document"));
    }
}
