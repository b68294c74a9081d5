//! nosj Format Specification
//!
//! This module documents the nosj format as implemented by this crate.
//!
//! # Overview
//!
//! nosj is a small JSON-like textual format with a twist: value kinds are
//! announced by explicit prefix/suffix markers instead of JSON's
//! punctuation conventions. There are exactly four value grammars, which
//! decode to three runtime shapes (both string grammars decode to text).
//!
//! # Document
//!
//! A document is a single map. Surrounding whitespace is ignored.
//!
//! ```text
//! <entry,entry,...>
//! ```
//!
//! - The trimmed document must start with `<` and end with `>`.
//! - Entries are separated by commas; a trailing comma before `>` is
//!   tolerated (the resulting empty entry is skipped).
//! - An empty body (`<>`) is a valid, empty map.
//!
//! # Entries
//!
//! An entry is `key:value`, split on the **first** colon. Both sides must
//! be non-empty. Entries are not trimmed, so whitespace around a key makes
//! it invalid.
//!
//! **Keys** are non-empty and strictly alphanumeric (`[A-Za-z0-9]+`).
//! A key may appear at most once per map; a duplicate is an error even when
//! the values are identical. Iteration and rendering preserve the order in
//! which keys appear.
//!
//! # Values
//!
//! Value classification tries these branches in order; the first match
//! wins:
//!
//! | Trigger | Kind | Example | Decodes to |
//! |---------|------|---------|------------|
//! | starts with `<` | nested map | `<b:i1>` | map |
//! | contains `%` | complex string | `hi%20there` | `hi there` |
//! | ends with `s` | simple string | `helloworlds` | `helloworld` |
//! | starts with `i` | integer | `i-42` | `-42` |
//! | otherwise | — | `42` | error |
//!
//! The ordering matters: `hi%20theres` contains a `%`, so it is a complex
//! string and decodes to `hi theres` with the literal `s` intact.
//!
//! ## Integers
//!
//! An `i`, an optional `-`, then one or more decimal digits and nothing
//! else. `i`, `i-`, and `i-3x` are all invalid. Values must fit in a
//! signed 64-bit integer; larger magnitudes are rejected.
//!
//! ## Simple strings
//!
//! One or more alphanumeric-or-whitespace characters ending in a literal
//! `s`, which is stripped on decode. `he.llos` is invalid (punctuation).
//!
//! ## Complex strings
//!
//! Alphanumeric characters and `%XX` escapes, where `XX` is a hexadecimal
//! byte value. At least one `%` must be present. `%2` (truncated) and
//! `%ZZ` (non-hex) are invalid.
//!
//! # Structural limitation: nested maps and commas
//!
//! Map bodies are split on the literal comma character without tracking
//! `<...>` bracket depth. A nested map whose own body contains a top-level
//! comma is fragmented by the outer split, and the fragments then fail the
//! delimiter check. Consequently a nested map may hold **at most one
//! entry**:
//!
//! ```text
//! <a:<b:i1>>        valid
//! <a:<b:i1,c:i2>>   malformed
//! ```
//!
//! This is part of the format contract, not a parser shortcut, and it is
//! pinned by tests.
//!
//! # Nesting depth
//!
//! Parsing is recursive, so nesting depth is bounded by
//! [`MAX_NESTING_DEPTH`](crate::de::MAX_NESTING_DEPTH) to keep adversarial
//! input from exhausting the stack. Deeper documents are malformed.
//!
//! # Failure policy
//!
//! The first violation encountered, in left-to-right, outer-to-inner entry
//! order, aborts the entire parse. There is no partial result, recovery,
//! or error aggregation.
//!
//! # Rendering
//!
//! Parsed documents render as a fixed two-line-bracketed representation:
//!
//! ```text
//! begin-map
//! count -- integer -- 3
//! note -- string -- hi there
//! child -- map --
//! begin-map
//! end-map
//! end-map
//! ```
//!
//! Scalar lines are `key -- <type> -- <value>`; a nested map's header line
//! has no inline value and is followed by the nested block at the same
//! indentation level.

// This module contains only documentation; no implementation code
