//! Human-readable rendering of parsed nosj documents.
//!
//! This module walks a fully parsed [`NosjMap`] and produces the fixed debug
//! representation the `nosj` tool prints: each map is bracketed by a
//! `begin-map` and an `end-map` line, with one line per entry between them.
//! Scalars show their type tag and decoded value; nested maps emit their own
//! bracketed block immediately after their header line.
//!
//! The renderer has no validation responsibility. The tree it receives is
//! already fully validated, so the walk cannot fail.
//!
//! ## Examples
//!
//! ```rust
//! use nosj::{from_str, render};
//!
//! let map = from_str("<x:i1>").unwrap();
//! assert_eq!(render(&map), "begin-map\nx -- integer -- 1\nend-map\n");
//! ```

use crate::{NosjMap, Value};
use std::fmt::Write;

/// Renders a parsed map as the fixed debug representation.
///
/// Entries appear in iteration order, which equals their order of
/// appearance in the source document.
#[must_use]
pub fn render(map: &NosjMap) -> String {
    let mut out = String::new();
    write_map(map, &mut out);
    out
}

fn write_map(map: &NosjMap, out: &mut String) {
    out.push_str("begin-map\n");

    for (key, value) in map {
        match value {
            // Map headers carry no inline value but keep the trailing
            // separator, space included.
            Value::Map(inner) => {
                let _ = writeln!(out, "{key} -- map -- ");
                write_map(inner, out);
            }
            Value::Integer(n) => {
                let _ = writeln!(out, "{key} -- integer -- {n}");
            }
            Value::Text(s) => {
                let _ = writeln!(out, "{key} -- string -- {s}");
            }
        }
    }

    out.push_str("end-map\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nosj;

    #[test]
    fn test_empty_map() {
        assert_eq!(render(&NosjMap::new()), "begin-map\nend-map\n");
    }

    #[test]
    fn test_scalar_entries_in_order() {
        let Value::Map(map) = nosj!({
            "zulu": 26,
            "alpha": "first"
        }) else {
            unreachable!()
        };

        assert_eq!(
            render(&map),
            "begin-map\n\
             zulu -- integer -- 26\n\
             alpha -- string -- first\n\
             end-map\n"
        );
    }

    #[test]
    fn test_nested_map_block() {
        let Value::Map(map) = nosj!({
            "outer": { "inner": 7 }
        }) else {
            unreachable!()
        };

        assert_eq!(
            render(&map),
            "begin-map\n\
             outer -- map -- \n\
             begin-map\n\
             inner -- integer -- 7\n\
             end-map\n\
             end-map\n"
        );
    }
}
