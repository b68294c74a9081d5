//! nosj deserialization.
//!
//! This module parses nosj text into a [`NosjMap`] tree by recursive
//! descent. A document is a map enclosed in `<` and `>`, containing
//! comma-separated `key:value` entries. Values are explicitly tagged:
//!
//! - a value starting with `<` is a nested map,
//! - a value containing `%` is a complex string (`%XX` percent escapes),
//! - a value ending in `s` is a simple string (the `s` is stripped),
//! - a value starting with `i` is a decimal integer.
//!
//! The branches are tried in exactly that order, so a value containing both
//! a `%` and a trailing `s` is always a complex string.
//!
//! Parsing is all-or-nothing: the first grammar violation anywhere in the
//! document, in left-to-right, outer-to-inner order, aborts the parse.
//!
//! ## Usage
//!
//! ```rust
//! use nosj::from_str;
//!
//! let map = from_str("<name:Alices,age:i30>").unwrap();
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(map.get("age").and_then(|v| v.as_i64()), Some(30));
//! ```
//!
//! ## Entry splitting
//!
//! Map bodies are split on the literal comma character without tracking
//! bracket depth. A nested map therefore parses only when its own body
//! contains no top-level comma, i.e. when it holds at most one entry. See
//! the [`spec`](crate::spec) module for why this is part of the format
//! contract rather than a parser shortcut.

use crate::{Error, NosjMap, Result, Value};

/// Maximum map nesting depth accepted by the parser.
///
/// Recursion depth is proportional to nesting depth, so adversarial input
/// could otherwise exhaust the stack. Deeper documents fail with a format
/// error.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a nosj document into its root map.
///
/// Surrounding whitespace is ignored; the trimmed text must be a map
/// enclosed in `<` and `>`. An empty body (`<>`) is a valid empty map.
///
/// # Examples
///
/// ```rust
/// use nosj::from_str;
///
/// let map = from_str("  <greeting:hi%20there>  ").unwrap();
/// assert_eq!(map.get("greeting").and_then(|v| v.as_str()), Some("hi there"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Format`] on any grammar, key, duplicate-key, delimiter,
/// or decode violation anywhere in the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<NosjMap> {
    build_map(input, 0)
}

/// Parses one map level: delimiters, entries, and values, recursing for
/// nested maps.
fn build_map(text: &str, depth: usize) -> Result<NosjMap> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::format(format!(
            "maps nested deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }

    let text = text.trim();
    if text.len() < 2 || !text.starts_with('<') || !text.ends_with('>') {
        return Err(Error::format("map is not enclosed in `<` and `>`"));
    }

    let body = &text[1..text.len() - 1];
    let mut map = NosjMap::new();

    for entry in body.split(',') {
        // A trailing comma produces one empty candidate; tolerated.
        if entry.is_empty() {
            continue;
        }

        let (key, value) = split_entry(entry)?;

        if !is_valid_key(key) {
            return Err(Error::format(format!("invalid key `{key}`")));
        }

        map.insert_unique(key.to_string(), parse_value(value, depth)?)?;
    }

    Ok(map)
}

/// Splits one raw entry on its first `:` into key and value substrings.
///
/// Both sides must be non-empty. Entries are not trimmed: whitespace around
/// a key makes the key invalid, by design.
fn split_entry(entry: &str) -> Result<(&str, &str)> {
    let (key, value) = entry
        .split_once(':')
        .ok_or_else(|| Error::format(format!("entry `{entry}` has no `:` separator")))?;

    if key.is_empty() {
        return Err(Error::format(format!("entry `{entry}` has an empty key")));
    }
    if value.is_empty() {
        return Err(Error::format(format!("entry `{entry}` has an empty value")));
    }

    Ok((key, value))
}

/// Classifies and parses one value string.
///
/// Branch order is load-bearing; see the module docs.
fn parse_value(text: &str, depth: usize) -> Result<Value> {
    if text.starts_with('<') {
        return Ok(Value::Map(build_map(text, depth + 1)?));
    }

    if text.contains('%') {
        if !is_valid_complex_string(text) {
            return Err(Error::format(format!("invalid complex string `{text}`")));
        }
        return decode_complex_string(text).map(Value::Text);
    }

    if text.ends_with('s') {
        if !is_valid_simple_string(text) {
            return Err(Error::format(format!("invalid simple string `{text}`")));
        }
        return decode_simple_string(text).map(Value::Text);
    }

    if text.starts_with('i') {
        if !is_valid_integer(text) {
            return Err(Error::format(format!("invalid integer `{text}`")));
        }
        return decode_integer(text).map(Value::Integer);
    }

    Err(Error::format(format!("value `{text}` matches no nosj type")))
}

/// Tests whether a string contains only decimal digits.
///
/// The empty string vacuously passes; callers enforce minimum lengths.
fn is_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Tests whether a string contains only ASCII letters and digits.
fn is_alphanumeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Tests whether a string contains only ASCII letters, digits, or whitespace.
fn is_alphanumeric_or_whitespace(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
}

/// Tests whether a string contains only ASCII letters, digits, or `%`.
fn is_alphanumeric_or_percent(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_alphanumeric() || c == '%')
}

/// Tests whether a string is a valid nosj key: non-empty and alphanumeric.
///
/// # Examples
///
/// ```rust
/// use nosj::de::is_valid_key;
///
/// assert!(is_valid_key("abc123"));
/// assert!(!is_valid_key(""));
/// assert!(!is_valid_key("a key"));
/// assert!(!is_valid_key("pct%"));
/// ```
#[must_use]
pub fn is_valid_key(text: &str) -> bool {
    !text.is_empty() && is_alphanumeric(text)
}

/// Tests whether a string is a valid nosj integer: an `i` followed by an
/// optional `-` and at least one digit, with nothing else.
#[must_use]
pub fn is_valid_integer(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('i') else {
        return false;
    };

    match rest.strip_prefix('-') {
        Some(digits) => !digits.is_empty() && is_numeric(digits),
        None => !rest.is_empty() && is_numeric(rest),
    }
}

/// Decodes a validated nosj integer to an `i64`.
///
/// The digit run is parsed as an unsigned 64-bit magnitude and negated when
/// a `-` is present. Magnitudes outside the `i64` range are rejected rather
/// than wrapped.
///
/// # Errors
///
/// Returns [`Error::Format`] if the input was not a valid integer after all
/// or the magnitude does not fit in an `i64`.
pub fn decode_integer(text: &str) -> Result<i64> {
    let rest = text
        .strip_prefix('i')
        .ok_or_else(|| Error::format(format!("invalid integer `{text}`")))?;

    let (negative, digits) = match rest.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, rest),
    };

    let magnitude: u64 = digits
        .parse()
        .map_err(|_| Error::format(format!("invalid integer `{text}`")))?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
            .ok_or_else(|| Error::format(format!("integer `{text}` out of range")))
    } else {
        i64::try_from(magnitude)
            .map_err(|_| Error::format(format!("integer `{text}` out of range")))
    }
}

/// Tests whether a string is a valid nosj simple string: non-empty, ending
/// in `s`, with every character alphanumeric or whitespace.
#[must_use]
pub fn is_valid_simple_string(text: &str) -> bool {
    text.ends_with('s') && is_alphanumeric_or_whitespace(text)
}

/// Decodes a validated simple string by stripping the trailing `s`.
///
/// # Errors
///
/// Returns [`Error::Format`] if the trailing `s` is missing, which cannot
/// happen for validated input.
pub fn decode_simple_string(text: &str) -> Result<String> {
    text.strip_suffix('s')
        .map(str::to_string)
        .ok_or_else(|| Error::format(format!("invalid simple string `{text}`")))
}

/// Tests whether a string is a valid nosj complex string: contains at least
/// one `%`, every character alphanumeric or `%`, and every `%` followed by
/// exactly two hex digits.
///
/// # Examples
///
/// ```rust
/// use nosj::de::is_valid_complex_string;
///
/// assert!(is_valid_complex_string("hi%20there"));
/// assert!(!is_valid_complex_string("plain"));
/// assert!(!is_valid_complex_string("bad%2"));
/// assert!(!is_valid_complex_string("bad%ZZ"));
/// ```
#[must_use]
pub fn is_valid_complex_string(text: &str) -> bool {
    if !text.contains('%') || !is_alphanumeric_or_percent(text) {
        return false;
    }

    // All characters are ASCII at this point, so byte indexing is safe.
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }

    true
}

/// Decodes a validated complex string, replacing each `%XX` escape with the
/// character its two hex digits encode. Runs without `%` pass through
/// unchanged.
///
/// # Errors
///
/// Returns [`Error::Format`] on a truncated or non-hex escape, which cannot
/// happen for validated input.
pub fn decode_complex_string(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let mut decoded = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes
                .get(i + 1..i + 3)
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| Error::format(format!("invalid percent escape in `{text}`")))?;
            decoded.push(escape as char);
            i += 3;
        } else {
            decoded.push(bytes[i] as char);
            i += 1;
        }
    }

    Ok(decoded)
}
